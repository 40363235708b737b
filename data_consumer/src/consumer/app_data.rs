//! Opaque application data

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Application payload attached to a consumer.
///
/// The consumer never looks inside. Clones share the same allocation, so
/// [`AppData::ptr_eq`] tells whether two handles refer to the value originally
/// supplied.
#[derive(Clone)]
pub struct AppData(Arc<dyn Any + Send + Sync>);

impl AppData {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &AppData) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for AppData {
    fn default() -> Self {
        Self::new(())
    }
}

impl fmt::Debug for AppData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppData(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Room {
        name: String,
    }

    #[test]
    fn test_downcast() {
        let data = AppData::new(Room {
            name: "lobby".to_string(),
        });

        assert_eq!(data.downcast_ref::<Room>().unwrap().name, "lobby");
        assert!(data.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_clones_share_allocation() {
        let data = AppData::new(7u32);
        let clone = data.clone();
        let other = AppData::new(7u32);

        assert!(data.ptr_eq(&clone));
        assert!(!data.ptr_eq(&other));
    }

    #[test]
    fn test_default_is_unit() {
        assert!(AppData::default().downcast_ref::<()>().is_some());
    }
}

//! Parameter Sets

use crate::core::geometry::*;
use crate::core::pbrt::*;
use std::collections::HashMap;

mod paramset_item;

// Re-export
pub use paramset_item::*;

/// A hashmap of parameter set items stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps.
#[derive(Clone)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub ints: ParamSetMap<Int>,
    pub floats: ParamSetMap<Float>,
    pub point3fs: ParamSetMap<Point3f>,
    pub normal3fs: ParamSetMap<Normal3f>,
    pub strings: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            let n = String::from(name);
            self.$paramset.insert(n, ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            let n = String::from(name);
            self.$paramset.remove(&n).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            let n = String::from(name);
            match self.$paramset.get(&n) {
                Some(param) => {
                    if param.values.len() == 1 {
                        param.values[0].clone()
                    } else {
                        default.clone()
                    }
                }
                None => default.clone(),
            }
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Vec<$t> {
            let n = String::from(name);
            match self.$paramset.get(&n) {
                Some(param) => param.values.clone(),
                None => vec![],
            }
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self {
            bools: HashMap::new(),
            ints: HashMap::new(),
            floats: HashMap::new(),
            point3fs: HashMap::new(),
            normal3fs: HashMap::new(),
            strings: HashMap::new(),
        }
    }

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_find!(find_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_erase!(erase_int, ints);
    paramset_find_one!(find_one_int, Int, ints);
    paramset_find!(find_int, Int, ints);
    paramset_add!(add_int, Int, ints);

    paramset_erase!(erase_float, floats);
    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_point3f, point3fs);
    paramset_find_one!(find_one_point3f, Point3f, point3fs);
    paramset_find!(find_point3f, Point3f, point3fs);
    paramset_add!(add_point3f, Point3f, point3fs);

    paramset_erase!(erase_normal3f, normal3fs);
    paramset_find_one!(find_one_normal3f, Normal3f, normal3fs);
    paramset_find!(find_normal3f, Normal3f, normal3fs);
    paramset_add!(add_normal3f, Normal3f, normal3fs);

    paramset_erase!(erase_string, strings);
    paramset_find_one!(find_one_string, String, strings);
    paramset_find!(find_string, String, strings);
    paramset_add!(add_string, String, strings);

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.bools.clear();
        self.ints.clear();
        self.floats.clear();
        self.point3fs.clear();
        self.normal3fs.clear();
        self.strings.clear();
    }
}

impl Default for ParamSet {
    /// Returns the "default value" for `ParamSet`.
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_one_returns_default_when_absent() {
        let params = ParamSet::new();
        assert_eq!(params.find_one_float("width", 1.0), 1.0);
        assert_eq!(params.find_one_string("type", String::from("flat")), "flat");
    }

    #[test]
    fn find_one_returns_default_when_multiple_values() {
        let mut params = ParamSet::new();
        params.add_float("width", &[0.1, 0.2]);
        assert_eq!(params.find_one_float("width", 1.0), 1.0);
    }

    #[test]
    fn add_find_erase_round_trip() {
        let mut params = ParamSet::new();
        params.add_point3f(
            "P",
            &[Point3f::new(0.0, 0.0, 0.0), Point3f::new(1.0, 0.0, 0.0)],
        );
        assert_eq!(params.find_point3f("P").len(), 2);

        assert!(params.erase_point3f("P"));
        assert!(params.find_point3f("P").is_empty());
        assert!(!params.erase_point3f("P"));
    }

    #[test]
    fn typed_maps_are_independent() {
        let mut params = ParamSet::new();
        params.add_int("splitdepth", &[3]);
        params.add_float("splitdepth", &[2.0]);
        assert_eq!(params.find_one_int("splitdepth", 0), 3);
        assert_eq!(params.find_one_float("splitdepth", 0.0), 2.0);
    }

    #[test]
    fn each_type_round_trips() {
        let mut params = ParamSet::new();
        params.add_bool("flip", &[true]);
        params.add_string("type", &[String::from("ribbon")]);
        params.add_normal3f("N", &[Normal3f::new(0.0, 1.0, 0.0)]);
        params.add_float("width", &[0.5]);
        params.add_int("splitdepth", &[1]);

        assert!(params.find_one_bool("flip", false));
        assert_eq!(params.find_one_string("type", String::new()), "ribbon");
        assert_eq!(
            params.find_one_normal3f("N", Normal3f::ZERO),
            Normal3f::new(0.0, 1.0, 0.0)
        );
        assert_eq!(params.find_bool("flip"), vec![true]);
        assert_eq!(params.find_string("type").len(), 1);
        assert_eq!(params.find_int("splitdepth"), vec![1]);
        assert_eq!(params.find_float("width"), vec![0.5]);
        assert_eq!(params.find_normal3f("N").len(), 1);

        assert!(params.erase_bool("flip"));
        assert!(params.erase_string("type"));
        assert!(params.erase_normal3f("N"));
        assert!(params.erase_float("width"));
        assert!(params.erase_int("splitdepth"));

        params.add_point3f("P", &[Point3f::new(1.0, 2.0, 3.0)]);
        assert_eq!(
            params.find_one_point3f("P", Point3f::ZERO),
            Point3f::new(1.0, 2.0, 3.0)
        );
        params.clear();
        assert!(params.find_point3f("P").is_empty());
    }
}

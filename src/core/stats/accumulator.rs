//! Statistics Accumulator

use std::collections::HashMap;
use std::sync::Mutex;

lazy_static! {
    pub static ref STATS_ACCUMULATOR: Mutex<StatsAccumulator> = Mutex::new(StatsAccumulator::new());
}

pub struct StatsAccumulator {
    counters: HashMap<String, i64>,
    memory_counters: HashMap<String, i64>,
    percentages: HashMap<String, (i64, i64)>,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self {
            counters: HashMap::new(),
            memory_counters: HashMap::new(),
            percentages: HashMap::new(),
        }
    }

    pub fn report_counter(&mut self, name: &str, val: i64) {
        if let Some(v) = self.counters.get_mut(name) {
            *v += val;
        } else {
            self.counters.insert(name.to_string(), val);
        }
    }

    pub fn report_memory_counter(&mut self, name: &str, bytes: i64) {
        if let Some(v) = self.memory_counters.get_mut(name) {
            *v += bytes;
        } else {
            self.memory_counters.insert(name.to_string(), bytes);
        }
    }

    pub fn report_percentage(&mut self, name: &str, num: i64, denom: i64) {
        if let Some(v) = self.percentages.get_mut(name) {
            v.0 += num;
            v.1 += denom;
        } else {
            self.percentages.insert(name.to_string(), (num, denom));
        }
    }

    /// Returns the accumulated value of a counter statistic.
    ///
    /// * `name` - The counter title.
    pub fn counter(&self, name: &str) -> i64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    /// Returns the accumulated bytes of a memory statistic.
    ///
    /// * `name` - The memory counter title.
    pub fn memory_counter(&self, name: &str) -> i64 {
        self.memory_counters.get(name).copied().unwrap_or(0)
    }

    /// Returns the accumulated (numerator, denominator) of a percentage
    /// statistic.
    ///
    /// * `name` - The percentage title.
    pub fn percentage(&self, name: &str) -> (i64, i64) {
        self.percentages.get(name).copied().unwrap_or((0, 0))
    }

    pub fn print(&self) {
        let mut to_print: HashMap<String, Vec<String>> = HashMap::new();

        for (k, v) in self.counters.iter() {
            if *v == 0 {
                continue;
            }

            let (category, title) = get_category_and_title(k);
            let s = format!("{:-42}               {:12}", title, v);

            to_print.entry(category).or_default().push(s);
        }

        for (k, v) in self.memory_counters.iter() {
            if *v == 0 {
                continue;
            }

            let (category, title) = get_category_and_title(k);
            let s = format!("{:-42}               {:>12}", title, format_bytes(*v));

            to_print.entry(category).or_default().push(s);
        }

        for (k, (num, denom)) in self.percentages.iter() {
            if *denom == 0 {
                continue;
            }
            let (category, title) = get_category_and_title(k);
            let s = format!(
                "{:-42}{:12} / {:12} ({:.2}%)",
                title,
                *num,
                *denom,
                (100.0 * *num as f64) / *denom as f64
            );
            to_print.entry(category).or_default().push(s);
        }

        println!("Statistics:");
        for (category, items) in to_print {
            println!("  {category}");
            for item in items {
                println!("    {item}");
            }
        }
    }

    pub fn clear(&mut self) {
        self.counters.clear();
        self.memory_counters.clear();
        self.percentages.clear();
    }
}

fn get_category_and_title(s: &str) -> (String, String) {
    if let Some(slash) = s.find('/') {
        let category = &s[0..slash];
        let title = &s[slash + 1..];
        (category.to_string(), title.to_string())
    } else {
        ("".to_string(), s.to_string())
    }
}

fn format_bytes(bytes: i64) -> String {
    let kib = bytes as f64 / 1024.0;
    if kib < 1024.0 {
        format!("{:.2} kB", kib)
    } else if kib < 1024.0 * 1024.0 {
        format!("{:.2} MiB", kib / 1024.0)
    } else {
        format!("{:.2} GiB", kib / (1024.0 * 1024.0))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut accum = StatsAccumulator::new();
        accum.report_counter("Intersections/Tests", 5);
        accum.report_counter("Intersections/Tests", 7);
        assert_eq!(accum.counter("Intersections/Tests"), 12);
    }

    #[test]
    fn percentages_accumulate_both_sides() {
        let mut accum = StatsAccumulator::new();
        accum.report_percentage("Intersections/Hits", 1, 10);
        accum.report_percentage("Intersections/Hits", 2, 5);
        assert_eq!(accum.percentage("Intersections/Hits"), (3, 15));
    }

    #[test]
    fn memory_counters_accumulate() {
        let mut accum = StatsAccumulator::new();
        accum.report_memory_counter("Memory/Curves", 1024);
        accum.report_memory_counter("Memory/Curves", 1024);
        assert_eq!(accum.memory_counter("Memory/Curves"), 2048);
    }

    #[test]
    fn clear_resets_everything() {
        let mut accum = StatsAccumulator::new();
        accum.report_counter("C", 1);
        accum.report_memory_counter("M", 1);
        accum.report_percentage("P", 1, 2);
        accum.clear();
        assert_eq!(accum.counter("C"), 0);
        assert_eq!(accum.memory_counter("M"), 0);
        assert_eq!(accum.percentage("P"), (0, 0));
    }

    #[test]
    fn byte_formatting() {
        assert_eq!(format_bytes(1024), "1.00 kB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
    }
}

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair. Serializes as `[lat, lon]`, the shape Leaflet takes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lat, c.lon]
    }
}

/// Parses `"(lat, lon)"`. Malformed halves come back as `NaN`, never an error.
pub fn parse_coordinate(raw: &str) -> Coordinate {
    let cleaned: String = raw.chars().filter(|c| *c != '(' && *c != ')').collect();
    let mut parts = cleaned.split(',');
    let lat = parts.next().map_or(f64::NAN, |s| parse_float(s.trim()));
    let lon = parts.next().map_or(f64::NAN, |s| parse_float(s.trim()));
    Coordinate { lat, lon }
}

pub fn convert_coordinates<S: AsRef<str>>(raw: &[S]) -> Vec<Coordinate> {
    raw.iter().map(|s| parse_coordinate(s.as_ref())).collect()
}

/// Float parsing with browser `parseFloat` rules: the longest numeric prefix
/// wins and trailing garbage is ignored.
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
#[path = "geo_test.rs"]
mod tests;

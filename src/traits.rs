use std::fmt;

/// Bytes in one kilobyte.
pub const KB: f64 = 1024.0;
/// Bytes in one megabyte.
pub const MB: f64 = KB * 1024.0;
/// Bytes in one gigabyte.
pub const GB: f64 = MB * 1024.0;

/// Binary unit a byte count is displayed in.
///
/// There is no plain byte unit: anything below one megabyte, including values
/// smaller than a kilobyte, is shown in kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kb,
    Mb,
    Gb,
}

impl Unit {
    /// Picks the largest unit whose size is less than or equal to `bytes`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbsize::Unit;
    /// assert_eq!(Unit::for_bytes(1023.0), Unit::Kb);
    /// assert_eq!(Unit::for_bytes(1024.0 * 1024.0), Unit::Mb);
    /// assert_eq!(Unit::for_bytes(1024.0 * 1024.0 * 1024.0 - 1.0), Unit::Mb);
    /// ```
    pub fn for_bytes(bytes: f64) -> Unit {
        if bytes >= GB {
            Unit::Gb
        } else if bytes >= MB {
            Unit::Mb
        } else {
            Unit::Kb
        }
    }

    pub fn divisor(self) -> f64 {
        match self {
            Unit::Kb => KB,
            Unit::Mb => MB,
            Unit::Gb => GB,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Kb => "KB",
            Unit::Mb => "MB",
            Unit::Gb => "GB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Formats a byte count into a human-readable string in KB, MB or GB.
///
/// The scaled value is rounded to two decimals (half away from zero), then
/// `.00` is dropped and a single trailing zero after the point is dropped.
/// NaN, infinities, zero and negative values all produce `"0 KB"`.
///
/// # Examples
///
/// ```
/// use kbsize::format_size;
/// assert_eq!(format_size(1536.0), "1.5 KB");
/// assert_eq!(format_size(1024.0 * 1024.0), "1 MB");
/// assert_eq!(format_size(f64::NAN), "0 KB");
/// assert_eq!(format_size(-5.0), "0 KB");
/// ```
pub fn format_size(bytes: f64) -> String {
    if !bytes.is_finite() || bytes <= 0.0 {
        return String::from("0 KB");
    }

    let unit = Unit::for_bytes(bytes);
    let rounded = (bytes / unit.divisor() * 100.0).round() / 100.0;

    format!("{} {}", trim_fraction(format!("{:.2}", rounded)), unit)
}

// Collapses ".00" first, then a single trailing zero in the hundredths place.
pub(crate) fn trim_fraction(mut text: String) -> String {
    if text.ends_with(".00") {
        text.truncate(text.len() - 3);
    } else if text.ends_with('0') && text.len() >= 3 && text.as_bytes()[text.len() - 3] == b'.' {
        text.pop();
    }
    text
}

/// Provides functionality to format numeric byte counts into human-readable strings.
///
/// Every implementation converts the value to `f64` and defers to [`format_size`],
/// so integer and floating point counts share the same units and rounding.
///
/// # Examples
///
/// ```
/// use kbsize::ByteSize;
/// assert_eq!(1024_u64.format_size(), "1 KB");
/// assert_eq!((1024_u64 * 1024 * 1024).format_size(), "1 GB");
/// assert_eq!((-1_i64).format_size(), "0 KB");
/// assert_eq!(2.5_f32.format_size(), "0 KB");
/// ```
pub trait ByteSize {
    /// Formats the number as `"<value> <unit>"` with unit `KB`, `MB` or `GB`.
    fn format_size(&self) -> String;
}

macro_rules! impl_byte_size {
    ($($t:ty),*) => {
        $(
            impl ByteSize for $t {
                fn format_size(&self) -> String {
                    format_size(*self as f64)
                }
            }
        )*
    };
}

impl_byte_size!(f64, f32, u64, i64, u32, i32, usize);

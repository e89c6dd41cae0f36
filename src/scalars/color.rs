//! Color notation scalars: hex codes and CSS functional notation.
//!
//! RGB/RGBA channels must agree on units: either every channel is a
//! plain integer or every channel carries a percent sign (floats are
//! only legal in the percent form). The two legal shapes are spelled
//! out as alternatives instead of a group backreference.

use std::sync::LazyLock;

use regex::Regex;

use crate::scalars::regex_string_scalar;

static HEX_COLOR_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3}|[A-Fa-f0-9]{8})$").unwrap());

static HSL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsl\(\s*(-?\d+|-?\d*.\d+)(turn|rad|deg|)\s*,\s*(-?\d+|-?\d*.\d+)%\s*,\s*(-?\d+|-?\d*.\d+)%\s*\)$",
    )
    .unwrap()
});

static HSLA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^hsla\(\s*(-?\d+|-?\d*.\d+)(turn|rad|deg|)\s*,\s*(-?\d+|-?\d*.\d+)%\s*,\s*(-?\d+|-?\d*.\d+)%\s*,\s*(-?\d+|-?\d*.\d+)\s*\)$",
    )
    .unwrap()
});

static RGB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgb\((\s*-?\d+\s*,\s*-?\d+\s*,\s*-?\d+\s*|\s*(-?\d+|-?\d*\.\d+)%\s*,\s*(-?\d+|-?\d*\.\d+)%\s*,\s*(-?\d+|-?\d*\.\d+)%\s*)\)$",
    )
    .unwrap()
});

static RGBA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba\((\s*-?\d+\s*,\s*-?\d+\s*,\s*-?\d+\s*|\s*(-?\d+|-?\d*\.\d+)%\s*,\s*(-?\d+|-?\d*\.\d+)%\s*,\s*(-?\d+|-?\d*\.\d+)%\s*),\s*(-?\d+|-?\d*\.\d+)\s*\)$",
    )
    .unwrap()
});

regex_string_scalar!(
    /// Scalar which handles hexadecimal color codes (#rgb, #rrggbb, #rrggbbaa)
    HexColorCode,
    "HexColorCode",
    "HexColorCode",
    |s| HEX_COLOR_CODE_REGEX.is_match(s)
);

regex_string_scalar!(
    /// Scalar which handles the Hue, Saturation and Lightness notation;
    /// the hue accepts turn/rad/deg units or a bare number
    Hsl,
    "HSL",
    "HSL",
    |s| HSL_REGEX.is_match(s)
);

regex_string_scalar!(
    /// Scalar which handles the Hue, Saturation, Lightness and Alpha notation
    Hsla,
    "HSLA",
    "HSLA",
    |s| HSLA_REGEX.is_match(s)
);

regex_string_scalar!(
    /// Scalar which handles the Red, Green, Blue notation
    Rgb,
    "RGB",
    "RGB",
    |s| RGB_REGEX.is_match(s)
);

regex_string_scalar!(
    /// Scalar which handles the Red, Green, Blue and Alpha notation
    Rgba,
    "RGBA",
    "RGBA",
    |s| RGBA_REGEX.is_match(s)
);

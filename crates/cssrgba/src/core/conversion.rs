/// Convert a unit-range coordinate to an unsigned byte.
///
/// The coordinate is scaled by 255 and rounded half away from zero. Since
/// `as` saturates, out-of-range coordinates clamp to `0x00..=0xff`.
#[inline]
pub(crate) fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0).round() as u8
}

/// Convert a percentage `0..=100` to an unsigned byte.
///
/// This is `round(p / 100 × 255)`, so `50%` becomes 128 and not 127.
#[inline]
pub(crate) fn percent_to_byte(percent: f64) -> u8 {
    unit_to_byte(percent / 100.0)
}

// --------------------------------------------------------------------------------------------------------------------

/// Map a hue parameter onto one RGB channel.
///
/// The parameter is first wrapped into unit range. The result is piecewise
/// linear in the parameter and lies between `lum1` and `lum2`.
#[allow(clippy::suboptimal_flops)]
fn hue_to_channel(lum1: f64, lum2: f64, mut hv: f64) -> f64 {
    if hv < 0.0 {
        hv += 1.0;
    }
    if hv > 1.0 {
        hv -= 1.0;
    }

    if hv < 1.0 / 6.0 {
        lum1 + (lum2 - lum1) * 6.0 * hv
    } else if hv < 1.0 / 2.0 {
        lum2
    } else if hv < 2.0 / 3.0 {
        lum1 + (lum2 - lum1) * (2.0 / 3.0 - hv) * 6.0
    } else {
        lum1
    }
}

/// Convert HSL to 24-bit sRGB.
///
/// The hue is in degrees, saturation and lightness are percentages. Achromatic
/// colors, i.e., colors with zero saturation, ignore the hue and use the
/// lightness for all three channels.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    if s == 0.0 {
        let gray = unit_to_byte(l);
        return [gray, gray, gray];
    }

    let lum2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lum1 = 2.0 * l - lum2;

    [
        unit_to_byte(hue_to_channel(lum1, lum2, h + 1.0 / 3.0)),
        unit_to_byte(hue_to_channel(lum1, lum2, h)),
        unit_to_byte(hue_to_channel(lum1, lum2, h - 1.0 / 3.0)),
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{hsl_to_rgb, hue_to_channel, percent_to_byte, unit_to_byte};

    #[test]
    fn test_bytes() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(0.5), 128);
        assert_eq!(unit_to_byte(-0.2), 0);
        assert_eq!(unit_to_byte(1.7), 255);

        assert_eq!(percent_to_byte(0.0), 0);
        assert_eq!(percent_to_byte(50.0), 128);
        assert_eq!(percent_to_byte(100.0), 255);
        assert_eq!(percent_to_byte(20.0), 51);
    }

    #[test]
    fn test_hue_to_channel() {
        // Wrap into unit range first.
        assert_eq!(hue_to_channel(0.0, 1.0, -0.5), hue_to_channel(0.0, 1.0, 0.5));
        assert_eq!(hue_to_channel(0.0, 1.0, 1.25), hue_to_channel(0.0, 1.0, 0.25));

        assert_eq!(hue_to_channel(0.2, 0.8, 0.0), 0.2);
        assert_eq!(hue_to_channel(0.2, 0.8, 0.25), 0.8);
        assert_eq!(hue_to_channel(0.2, 0.8, 0.9), 0.2);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), [0, 255, 0]);
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), [0, 0, 255]);
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), [255, 0, 0]);

        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), [255, 255, 0]);
        assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), [0, 255, 255]);
        assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0), [255, 0, 255]);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), [255, 255, 255]);
        assert_eq!(hsl_to_rgb(217.0, 0.0, 0.0), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(42.0, 0.0, 50.0), [128, 128, 128]);
    }

    #[test]
    fn test_light_and_dark() {
        // Lightness above 50% takes the l + s - l×s branch.
        assert_eq!(hsl_to_rgb(0.0, 100.0, 75.0), [255, 128, 128]);
        assert_eq!(hsl_to_rgb(0.0, 100.0, 25.0), [128, 0, 0]);
        // CSS cornflowerblue is close to hsl(219, 79%, 66%).
        assert_eq!(hsl_to_rgb(219.0, 79.0, 66.0), [100, 148, 237]);
    }
}

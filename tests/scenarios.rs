use float_cmp::approx_eq;
use tincture::colors::cielabcolor::LAB_PRECISION;
use tincture::colors::cielchcolor::{self, LCH_PRECISION};
use tincture::colors::cmykcolor::{self, CMYK_PRECISION};
use tincture::colors::hwbcolor;
use tincture::colors::xyzcolor::XYZ_PRECISION;
use tincture::colors::{
    CMYKAColor, HSLAColor, HSVAColor, HWBAColor, LABAColor, LCHAColor, RGBAColor, XYZAColor,
};
use tincture::prelude::*;
use tincture::utils::{clamp, clamp_hue, clamp_unit};

fn samples() -> Vec<RGBAColor> {
    let mut colors = vec![];
    for &r in &[0., 17., 128., 200., 255.] {
        for &g in &[0., 64., 255.] {
            for &b in &[0., 99., 231., 255.] {
                colors.push(RGBAColor::new(r, g, b, 0.7));
            }
        }
    }
    colors
}

fn assert_close(expected: RGBAColor, actual: RGBAColor, tolerance: f64) {
    for &(e, a) in &[
        (expected.r, actual.r),
        (expected.g, actual.g),
        (expected.b, actual.b),
    ] {
        assert!(
            (e - a).abs() <= tolerance,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }
    assert!(approx_eq!(f64, expected.a, actual.a, epsilon = 1e-3));
}

fn round_trip<T: ColorModel>(rgba: RGBAColor, digits: Option<i32>) -> RGBAColor {
    let model = T::from_rgba(rgba);
    match digits {
        Some(digits) => model.round(digits).to_rgba(),
        None => model.to_rgba(),
    }
}

#[test]
fn every_model_round_trips() {
    for rgba in samples() {
        assert_close(rgba, round_trip::<HSLAColor>(rgba, None), 1e-6);
        assert_close(rgba, round_trip::<HSVAColor>(rgba, None), 1e-6);
        assert_close(rgba, round_trip::<HWBAColor>(rgba, None), 1e-6);
        assert_close(rgba, round_trip::<CMYKAColor>(rgba, None), 1e-6);
        // the published matrices are inverses only to about 1e-4
        assert_close(rgba, round_trip::<XYZAColor>(rgba, None), 0.1);
        assert_close(rgba, round_trip::<LABAColor>(rgba, None), 0.1);
        assert_close(rgba, round_trip::<LCHAColor>(rgba, None), 0.1);
    }
}

#[test]
fn default_precision_round_trips_within_one_unit() {
    for rgba in samples() {
        assert_close(rgba, round_trip::<XYZAColor>(rgba, Some(XYZ_PRECISION)), 1.);
        assert_close(rgba, round_trip::<LABAColor>(rgba, Some(LAB_PRECISION)), 1.);
        assert_close(rgba, round_trip::<LCHAColor>(rgba, Some(LCH_PRECISION)), 1.);
        assert_close(rgba, round_trip::<CMYKAColor>(rgba, Some(CMYK_PRECISION)), 1.);
    }
}

#[test]
fn clamping_is_idempotent() {
    let values = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.5, 0., 0.5, 1., 300.];
    for &x in &values {
        assert_eq!(clamp_unit(clamp_unit(x)), clamp_unit(x));
        assert_eq!(clamp(clamp(x, 0., 255.), 0., 255.), clamp(x, 0., 255.));
        assert_eq!(clamp_hue(clamp_hue(x)), clamp_hue(x));
        let rgba = RGBAColor::new(x, x, x, x);
        assert_eq!(rgba.clamp(), rgba);
    }
}

#[test]
fn hue_wraps_around() {
    assert_eq!(clamp_hue(-1.), 359.);
    assert_eq!(clamp_hue(361.), 1.);
    assert_eq!(clamp_hue(f64::NAN), 0.);
    let obj = ColorObject::new().with("h", -120.).with("s", 100.).with("l", 50.);
    assert_eq!(Color::new(&obj).to_hex(), "#0000ff");
}

#[test]
fn opaque_alpha_is_not_printed() {
    let nearly_opaque = RGBAColor::new(255., 0., 0., 0.999995);
    assert_eq!(
        cmykcolor::to_css_string(nearly_opaque, CMYK_PRECISION),
        "device-cmyk(0% 100% 100% 0%)"
    );
    assert_eq!(hwbcolor::to_css_string(nearly_opaque, 0), "hwb(0 0% 0%)");
    assert_eq!(
        cielchcolor::to_css_string(nearly_opaque, LCH_PRECISION),
        cielchcolor::to_css_string(RGBAColor::new(255., 0., 0., 1.), LCH_PRECISION)
    );
    let color = Color::from(nearly_opaque);
    assert_eq!(color.to_rgb_string(), "rgb(255, 0, 0)");
    assert_eq!(color.to_hsl_string(), "hsl(0, 100%, 50%)");
    assert_eq!(color.to_hex(), "#ff0000");
}

#[test]
fn degenerate_conversions_are_not_nan() {
    let cmyk = CMYKAColor::from_rgba(RGBAColor::black()).round(CMYK_PRECISION);
    assert_eq!(cmyk, CMYKAColor { c: 0., m: 0., y: 0., k: 100., a: 1. });
    for &h in &[0., 90., 213., 359.] {
        for &w in &[0., 40., 100.] {
            let hwba = HWBAColor { h, w, b: 100., a: 1. };
            assert_eq!(hwba.to_rgba().round(0), RGBAColor::black());
        }
    }
    let gray = LCHAColor::from_rgba(RGBAColor::new(119., 119., 119., 1.));
    assert_eq!(gray.h, 0.);
}

#[cfg(feature = "a11y")]
#[test]
fn contrast_bounds() {
    assert_eq!(Color::new("#fff").contrast("#fff"), 1.);
    assert!((Color::new("#fff").contrast("#000") - 21.).abs() <= 0.01);
}

#[cfg(feature = "lch")]
#[test]
fn lch_scenario() {
    let color = Color::new("lch(29.2345% 44.2 27 / 0.6)");
    assert_eq!(color.format(), Some(Format::Lch));
    let lch = color.to_lch();
    assert!((lch.l - 29.23).abs() <= 0.011);
    assert!((lch.c - 44.2).abs() <= 0.011);
    assert!((lch.h - 27.).abs() <= 0.011);
    assert_eq!(lch.a, 0.6);
}

#[cfg(feature = "cmyk")]
#[test]
fn device_cmyk_scenario() {
    let color = Color::new("device-cmyk(0% 100% 0% 0%)");
    assert_eq!(color.format(), Some(Format::Cmyk));
    assert_eq!(color.to_rgb(), RGBAColor::new(255., 0., 255., 1.));
}

#[cfg(feature = "lab")]
#[test]
fn delta_is_a_metric() {
    let colors = ["#ff0000", "#3296fa", "#c0ffee", "#000", "#777", "#faf0c8"];
    for first in &colors {
        assert_eq!(Color::new(*first).delta(*first), 0.);
        for second in &colors {
            let forward = Color::new(*first).delta(*second);
            assert_eq!(forward, Color::new(*second).delta(*first));
        }
    }
}

#[test]
fn core_registry_reads_core_formats_only() {
    let core_only = ParserRegistry::builder().build();
    assert!(!Color::with_registry("device-cmyk(0 0 0 0)", &core_only).is_valid());
    assert!(Color::with_registry("#fff", &core_only).is_valid());
    assert_eq!(core_only.string_formats(), vec![Format::Hex, Format::Rgb, Format::Hsl]);
    assert_eq!(core_only.object_formats(), vec![Format::Rgb, Format::Hsl, Format::Hsv]);
}

#[cfg(all(
    feature = "cmyk",
    feature = "hwb",
    feature = "lab",
    feature = "lch",
    feature = "xyz"
))]
#[test]
fn global_registry_order() {
    let global = ParserRegistry::global();
    assert_eq!(
        global.string_formats(),
        vec![Format::Hex, Format::Rgb, Format::Hsl, Format::Cmyk, Format::Hwb, Format::Lch]
    );
    assert_eq!(
        global.object_formats(),
        vec![
            Format::Rgb,
            Format::Hsl,
            Format::Hsv,
            Format::Cmyk,
            Format::Hwb,
            Format::Lab,
            Format::Lch,
            Format::Xyz
        ]
    );
}

#[test]
fn registry_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("hsl({} 100% 50%)", i * 90);
                Color::new(&input).to_hex()
            })
        })
        .collect();
    let hexes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(hexes, vec!["#ff0000", "#80ff00", "#00ffff", "#8000ff"]);
}

#[test]
fn colors_serialize() {
    let lab = LABAColor::from_rgba(RGBAColor::new(255., 255., 255., 1.)).round(LAB_PRECISION);
    let json = serde_json::to_string(&lab).unwrap();
    assert_eq!(json, r#"{"l":100.0,"a":0.0,"b":0.0,"alpha":1.0}"#);
}

#[cfg(feature = "a11y")]
#[test]
fn readability_options_deserialize() {
    let json = r#"{"level":"AAA","size":"Large"}"#;
    let options: ReadabilityOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.level, Level::AAA);
    assert_eq!(options.size, TextSize::Large);
}

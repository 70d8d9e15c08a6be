#[cfg(test)]
mod tests {
    use super::super::context::{ConversionContext, PropertyType};
    use super::super::converter::{convert, from_px, to_px};
    use super::super::formatter::format;
    use super::super::types::Unit;

    fn full_context() -> ConversionContext {
        ConversionContext::new()
            .with_root_font_size(18.0)
            .with_parent_font_size(14.0)
            .with_viewport(1440.0, 900.0)
            .with_container(720.0, 360.0)
    }

    #[test]
    fn test_round_trip_through_px() {
        let contexts = [
            full_context(),
            full_context().with_property(PropertyType::Width),
            full_context().with_property(PropertyType::Height),
            full_context().with_property(PropertyType::FontSize),
        ];

        for ctx in &contexts {
            for unit in Unit::ALL {
                for original in [0.0, 1.0, 16.0, -3.25, 1234.5678] {
                    let there = convert(original, Unit::Px, unit, ctx).unwrap();
                    let back = convert(there, unit, Unit::Px, ctx).unwrap();
                    assert!(
                        (back - original).abs() < 1e-6,
                        "px -> {} -> px: {} became {} ({:?})",
                        unit,
                        original,
                        back,
                        ctx.property
                    );
                }
            }
        }
    }

    #[test]
    fn test_from_px_inverts_to_px() {
        let ctx = full_context();
        for unit in Unit::ALL {
            let px = to_px(2.5, unit, &ctx).unwrap();
            let value = from_px(px, unit, &ctx).unwrap();
            assert!((value - 2.5).abs() < 1e-9, "{}: {}", unit, value);
        }
    }

    #[test]
    fn test_pairwise_matches_pixel_pivot() {
        let ctx = full_context();
        for from in Unit::ALL {
            for to in Unit::ALL {
                let direct = convert(3.0, from, to, &ctx).unwrap();
                let px = to_px(3.0, from, &ctx).unwrap();
                let pivot = from_px(px, to, &ctx).unwrap();
                assert!((direct - pivot).abs() < 1e-9, "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_display_after_round_trip() {
        let ctx = ConversionContext::default();
        let rem = convert(24.0, Unit::Px, Unit::Rem, &ctx).unwrap();
        assert_eq!(format(rem, Unit::Rem), "1.5");
        let px = convert(rem, Unit::Rem, Unit::Px, &ctx).unwrap();
        assert_eq!(format(px, Unit::Px), "24");
    }

    #[test]
    fn test_absolute_units_ignore_context() {
        let small = ConversionContext::new().with_root_font_size(10.0);
        let large = full_context();
        for from in Unit::ALL.iter().filter(|u| u.is_absolute()) {
            for to in Unit::ALL.iter().filter(|u| u.is_absolute()) {
                assert_eq!(
                    convert(7.0, *from, *to, &small).unwrap(),
                    convert(7.0, *from, *to, &large).unwrap()
                );
            }
        }
    }
}

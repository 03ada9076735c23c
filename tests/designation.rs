use bar_screen_toolbox::catalog::Construction;
use bar_screen_toolbox::screen::{format_designation, DesignationParts};

fn parts(channel_width_class: i32, grate_height_class: i32) -> DesignationParts<'static> {
    DesignationParts {
        construction: Construction::Large,
        width_class: 16,
        height_class: 12,
        channel_width_class,
        grate_height_class,
        profile_name: "1492",
        gap: 0.010,
    }
}

#[test]
fn plain_designation() {
    assert_eq!(format_designation(&parts(16, 12)), "РКЭ 1612.1492.10");
}

#[test]
fn override_slots_fall_back_to_zeros() {
    assert_eq!(format_designation(&parts(16, 15)), "РКЭ 1612(0015).1492.10");
    assert_eq!(format_designation(&parts(17, 12)), "РКЭ 1612(1700).1492.10");
    assert_eq!(format_designation(&parts(18, 21)), "РКЭ 1612(1821).1492.10");
}

#[test]
fn small_construction_and_fractional_gap() {
    let small = DesignationParts {
        construction: Construction::Small,
        width_class: 6,
        height_class: 9,
        channel_width_class: 7,
        grate_height_class: 9,
        profile_name: "341",
        gap: 0.0055,
    };
    assert_eq!(format_designation(&small), "РКЭм 0609(0700).341.5.5");
}

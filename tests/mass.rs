use approx::assert_relative_eq;
use bar_screen_toolbox::catalog::{find_profile, Construction, FilterProfile};
use bar_screen_toolbox::screen::mass::{grid_assembly_mass, total_mass};
use bar_screen_toolbox::screen::{
    compute, compute_with, CalcSettings, HeavyDrive, InputData, MassInputs,
};

fn profile(name: &str) -> FilterProfile {
    *find_profile(name).expect("profile in catalog")
}

fn large_inputs() -> MassInputs {
    MassInputs {
        width_class: 16,
        height_class: 12,
        grate_height_class: 15,
        width_class_difference: 0,
        backwall_height_class: 7,
        cover_height_class: 7,
        stand_height_class: 10,
        profile_count: 81,
        rake_count: 7,
        covers_count: 4,
        chain_length: 5.6,
        profile: profile("1492"),
        is_heavy: true,
    }
}

#[test]
fn grid_assembly_large() {
    let inputs = large_inputs();
    let balk = 0.6919 * 16.0 - 0.7431;
    let fp = 0.2481 * 15.0 - 0.4829;
    let expected = 2.0 * balk + 81.0 * fp + 4.0 * 0.16;
    assert_relative_eq!(
        grid_assembly_mass(Construction::Large, &inputs),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn grid_assembly_small() {
    let inputs = MassInputs {
        width_class: 6,
        height_class: 6,
        grate_height_class: 6,
        profile_count: 32,
        profile: profile("3999"),
        ..large_inputs()
    };
    let balk = 0.3825 * 6.0 - 0.565;
    let fp = 0.1167 * 6.0 - 0.13;
    let expected = 2.0 * balk + 32.0 * fp + 4.0 * 0.08;
    assert_relative_eq!(
        grid_assembly_mass(Construction::Small, &inputs),
        expected,
        max_relative = 1e-12
    );
}

#[test]
fn total_is_sum_of_items() {
    for construction in [Construction::Small, Construction::Large] {
        let breakdown = total_mass(construction, &large_inputs());
        let sum: f64 = breakdown.items.iter().map(|item| item.mass()).sum();
        assert_relative_eq!(breakdown.total, sum, max_relative = 1e-12);
        assert!(breakdown.total > 0.0);
    }
}

#[test]
fn large_breakdown_counts() {
    let breakdown = total_mass(Construction::Large, &large_inputs());
    assert_eq!(breakdown.item("RKE-04 rake").expect("rakes").quantity, 7.0);
    assert_eq!(breakdown.item("RKE-10 front cover").expect("covers").quantity, 4.0);
    assert_relative_eq!(
        breakdown.item("RKE-02 drive").expect("drive").unit_mass,
        1.85 * 16.0 + 97.28 + 2.29,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        breakdown.item("MS56-R-100 chain").expect("chain").mass(),
        2.0 * 4.18 * 5.6,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        breakdown.item("RKE-08 floor stand").expect("stand").unit_mass,
        1.8267 * 10.0 + 8.0633,
        max_relative = 1e-12
    );
}

#[test]
fn small_breakdown_has_single_body() {
    let breakdown = total_mass(Construction::Small, &large_inputs());
    assert!(breakdown.item("body").is_some());
    assert!(breakdown.item("RKE-01 body").is_none());
    assert_relative_eq!(breakdown.item("other").expect("other").mass(), 3.57);
}

#[test]
fn heavy_drive_adds_fixed_increment() {
    let light = MassInputs {
        is_heavy: false,
        ..large_inputs()
    };
    let diff = total_mass(Construction::Large, &large_inputs()).total
        - total_mass(Construction::Large, &light).total;
    assert_relative_eq!(diff, 2.29, epsilon = 1e-9);

    let input = InputData::new(1.7, 1.2, profile("1492"), 0.010);
    let heavy = compute(input.clone()).expect("default settings");
    let settings = CalcSettings {
        heavy_drive: HeavyDrive::FromHeightClass { min_height_class: 21 },
        ..CalcSettings::default()
    };
    let light = compute_with(input, &settings).expect("height dependent");
    assert!(heavy.is_heavy);
    assert!(!light.is_heavy);
    assert_relative_eq!(heavy.mass() - light.mass(), 2.29, epsilon = 1e-9);
}

#[test]
fn mass_grows_with_width() {
    let profile = profile("1492");
    let mut previous = 0.0;
    for width_dm in 11..=25 {
        let screen = compute(InputData::new(f64::from(width_dm) / 10.0, 1.2, profile, 0.010))
            .expect("screen");
        assert!(!screen.is_small());
        assert!(screen.mass() > previous, "width {width_dm}");
        previous = screen.mass();
    }
}

fn height_rule() -> CalcSettings {
    CalcSettings {
        heavy_drive: HeavyDrive::FromHeightClass { min_height_class: 21 },
        ..CalcSettings::default()
    }
}

#[test]
fn known_total_small_screen() {
    let input = InputData::new(0.7, 0.3, profile("6x60"), 0.025);
    let screen = compute_with(input, &height_rule()).expect("small screen");
    assert_eq!(
        (screen.width_class, screen.height_class, screen.grate_height_class),
        (6, 3, 6)
    );
    assert_eq!(screen.construction, Construction::Small);
    assert_relative_eq!(screen.mass(), 257.512048, epsilon = 1e-4);
}

#[test]
fn known_total_large_screens() {
    let input = InputData::new(1.5, 0.8, profile("3999"), 0.005);
    let screen = compute_with(input, &height_rule()).expect("medium screen");
    assert_eq!(
        (screen.width_class, screen.height_class, screen.grate_height_class),
        (14, 9, 12)
    );
    assert_eq!(screen.profile_count, 87);
    assert_relative_eq!(screen.mass(), 774.7674, epsilon = 1e-4);

    let input = InputData::new(2.0, 1.2, profile("1492"), 0.010);
    let screen = compute_with(input, &height_rule()).expect("wide screen");
    assert_eq!(
        (screen.width_class, screen.height_class, screen.grate_height_class),
        (19, 12, 15)
    );
    assert_eq!(screen.profile_count, 97);
    assert!(!screen.is_heavy);
    assert_relative_eq!(screen.mass(), 1120.3922, epsilon = 1e-4);
    let selection = screen.drive.expect("drive");
    assert_eq!(selection.option.drive.designation, "SK 32100 AZBHVL-80LP/4");
    assert_relative_eq!(screen.spring_preload.expect("preload"), 0.014, epsilon = 1e-9);
}

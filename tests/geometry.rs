use hull_resistance_calculator::hull::{derive_geometry, HullPrincipalDimensions};

fn cargo_hull() -> HullPrincipalDimensions {
    HullPrincipalDimensions::new(120.0, 18.0, 7.5, 0.72).expect("dimensões válidas")
}

#[test]
fn displacement_is_exact_product() {
    let dims = cargo_hull();
    let geo = derive_geometry(&dims);
    // Identidade algébrica, sem tolerância.
    assert_eq!(geo.displacement_m3, 120.0 * 18.0 * 7.5 * 0.72);
}

#[test]
fn midship_coefficient_matches_kerlen() {
    let geo = derive_geometry(&cargo_hull());
    // CM = 1.006 - 0.0056 * 0.72^-3.56
    assert!((geo.cm - 0.98797).abs() < 1e-4, "cm={}", geo.cm);
    assert!(geo.cm < 1.0);
}

#[test]
fn wetted_surface_matches_holtrop_formula() {
    let geo = derive_geometry(&cargo_hull());
    assert!(
        (geo.wetted_surface_m2 - 3074.6).abs() < 2.0,
        "S={}",
        geo.wetted_surface_m2
    );
}

#[test]
fn lcb_and_appendage_area() {
    let geo = derive_geometry(&cargo_hull());
    assert!((geo.lcb_percent - 0.6381).abs() < 1e-3, "lcb={}", geo.lcb_percent);
    // Disco do hélice: 0.5 * π * (0.7 * 7.5)²
    assert!(
        (geo.appendage_area_m2 - 43.2957).abs() < 1e-3,
        "app={}",
        geo.appendage_area_m2
    );
}

#[test]
fn waterplane_coefficient_between_cb_and_one() {
    let dims = cargo_hull();
    let geo = derive_geometry(&dims);
    assert!(geo.cwp > dims.cb && geo.cwp < 1.0);
}

#[test]
fn rejects_non_physical_dimensions() {
    assert!(HullPrincipalDimensions::new(0.0, 18.0, 7.5, 0.72).is_err());
    assert!(HullPrincipalDimensions::new(120.0, -1.0, 7.5, 0.72).is_err());
    assert!(HullPrincipalDimensions::new(120.0, 18.0, 0.0, 0.72).is_err());
    assert!(HullPrincipalDimensions::new(120.0, 18.0, 7.5, 0.0).is_err());
    assert!(HullPrincipalDimensions::new(120.0, 18.0, 7.5, 1.0).is_err());
    assert!(HullPrincipalDimensions::new(120.0, 18.0, 7.5, f64::NAN).is_err());
}

#[test]
fn fine_hull_midship_coefficient_stays_physical() {
    // A regressão de Kerlen ficaria negativa neste CB; vale a forma de
    // Jensen, que mantém 0 < CB < CM < 1.
    let dims = HullPrincipalDimensions::new(40.0, 10.0, 2.0, 0.20).expect("dimensões válidas");
    let geo = derive_geometry(&dims);
    assert!(geo.cm > 0.0 && geo.cm < 1.0, "cm={}", geo.cm);
    assert!(geo.cm > dims.cb);
    assert!(geo.wetted_surface_m2.is_finite());
    assert!(geo.wetted_surface_m2 > 0.0);
}

#[test]
fn geometry_is_computed_even_outside_applicability() {
    // CB = 0.30 está fora da faixa de Holtrop, mas a geometria é total.
    let dims = HullPrincipalDimensions::new(40.0, 10.0, 2.0, 0.30).expect("dimensões válidas");
    let geo = derive_geometry(&dims);
    assert!(geo.wetted_surface_m2 > 0.0);
    assert!(geo.displacement_m3 > 0.0);
}

use std::{fs, path::Path};

use approx::assert_relative_eq;
use resoil::{
    models::suspension::{
        CatalogSelector, SelectionConfig, SelectionError, SelectionInput, select,
    },
    support::catalog::Catalog,
};
use twine_core::Model;
use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Mass},
    length::meter,
    mass::kilogram,
    ratio::ratio,
};

const SPRINGS: &str = "\
Modelo,[Y] Constante elástica (lbs/in),Diámetro exterior (in)
S-20,20,1.0
S-40,40,1.2
S-60,60,1.4
S-80,80,1.6
";

const OILS: &str = "\
Nombre,Densidad (g/cm³),Visc_40 (mm²/s),Visc_100 (mm²/s)
5W,0.860,32,5.9
10W,0.870,68,8.8
15W,0.881,100,11.6
20W,0.890,150,14.0
";

fn write_catalogs(dir: &Path) -> (Catalog, Catalog) {
    let springs = dir.join("Resortes_resoil.csv");
    let oils = dir.join("Aceites_resoil.csv");
    fs::write(&springs, SPRINGS).unwrap();
    fs::write(&oils, OILS).unwrap();

    (
        Catalog::from_path(springs).unwrap(),
        Catalog::from_path(oils).unwrap(),
    )
}

fn input() -> SelectionInput {
    SelectionInput::new(
        AngularVelocity::new::<radian_per_second>(10.0),
        Mass::new::<kilogram>(100.0),
        Length::new::<meter>(0.02),
    )
    .unwrap()
}

#[test]
fn catalogs_from_files_are_named_after_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let (springs, oils) = write_catalogs(dir.path());

    assert_eq!(springs.name(), "Resortes_resoil");
    assert_eq!(oils.name(), "Aceites_resoil");
    assert_eq!(springs.len(), 4);
}

#[test]
fn selector_picks_pair_and_exports_response() {
    let dir = tempfile::tempdir().unwrap();
    let (springs, oils) = write_catalogs(dir.path());

    let selector = CatalogSelector::new(springs, oils, SelectionConfig::default()).unwrap();
    let selection = selector.call(&input()).unwrap();

    assert_eq!(selection.spring.get("Modelo"), Some("S-60"));
    assert_eq!(selection.oil.get("Nombre"), Some("10W"));
    assert_relative_eq!(
        selection.damping_ratio.get::<ratio>(),
        0.165_842_94,
        epsilon = 1e-8
    );

    let csv = dir.path().join("response.csv");
    selection.response.save_csv(&csv).unwrap();

    let text = fs::read_to_string(&csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("time [s],displacement [m]"));
    assert_eq!(lines.next(), Some("0,0.02"));
    assert_eq!(lines.count(), 1999);
}

#[test]
fn config_file_changes_the_target_ratio() {
    let dir = tempfile::tempdir().unwrap();
    let (springs, oils) = write_catalogs(dir.path());

    let config_path = dir.path().join("resoil.json");
    fs::write(&config_path, r#"{ "target_damping_ratio": 0.35, "samples": 10 }"#).unwrap();
    let config = SelectionConfig::from_path(&config_path).unwrap();

    let selector = CatalogSelector::new(springs, oils, config).unwrap();
    let selection = selector.call(&input()).unwrap();

    assert_eq!(selection.oil.get("Nombre"), Some("20W"));
    assert_eq!(selection.response.len(), 10);
}

#[test]
fn renamed_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let (springs, oils) = write_catalogs(dir.path());

    let config = SelectionConfig {
        oil_column: "Visc_60 (mm²/s)".into(),
        ..SelectionConfig::default()
    };
    let selector = CatalogSelector::new(springs, oils, config).unwrap();
    let err = selector.call(&input()).unwrap_err();

    assert!(matches!(err, SelectionError::Catalog(_)));
    assert_eq!(
        err.to_string(),
        "catalog `Aceites_resoil` has no column `Visc_60 (mm²/s)`"
    );
}

#[test]
fn spring_rows_with_a_blank_rate_are_skipped() {
    let springs = Catalog::from_reader(
        "\
Modelo,[Y] Constante elástica (lbs/in)
S-20,20
S-X,
S-60,60
"
        .as_bytes(),
    )
    .unwrap();
    let oils = Catalog::from_reader(OILS.as_bytes()).unwrap();

    let selection = select(&springs, &oils, &input(), &SelectionConfig::default()).unwrap();

    assert_eq!(selection.spring.index, 2);
    assert_eq!(selection.spring.get("Modelo"), Some("S-60"));
    assert_eq!(selection.spring.get("[Y] Constante elástica (lbs/in)"), Some("60"));
}

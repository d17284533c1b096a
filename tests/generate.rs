use std::fs;
use std::path::Path;

use mockito::{Mock, Server, ServerGuard};

use multilevel_sensor_gen::command::{self, GenerateError};
use multilevel_sensor_gen::constants::markers::END_MARKER;
use multilevel_sensor_gen::splice::SpliceError;
use multilevel_sensor_gen::{GeneratorConfig, SourceConfig};

const SEED_FILE: &str = include_str!("../generated/multilevel_sensor.rs");

const SENSOR_TYPES: &str = r#"{
    // Upstream files carry line comments
    "0x01": {
        "label": "Air temperature",
        "scales": "$SCALES:temperature"
    },
    "0x17": {
        "label": "Water temperature",
        "scales": "$SCALES:temperature"
    },
    "0x05": {
        "label": "Humidity",
        "scales": "$SCALES:humidity"
    },
    "0x58": {
        "label": "Distance (ft/m)",
        "scales": {
            "0x00": { "label": "Meter", "unit": "m" },
            "0x01": { "label": "Feet", "unit": "ft" }
        }
    },
    "0x3c": {
        "label": "Boiler water temperature",
        "scales": {
            "0x01": { "label": "Fahrenheit", "unit": "°F" },
            "0x00": { "label": "Celsius", "unit": "°C" }
        }
    }
}"#;

const SENSOR_TYPES_REORDERED: &str = r#"{
    "0x3c": {
        "label": "Boiler water temperature",
        "scales": {
            "0x00": { "label": "Celsius", "unit": "°C" },
            "0x01": { "label": "Fahrenheit", "unit": "°F" }
        }
    },
    "0x58": {
        "label": "Distance (ft/m)",
        "scales": {
            "0x01": { "label": "Feet", "unit": "ft" },
            "0x00": { "label": "Meter", "unit": "m" }
        }
    },
    "0x05": { "label": "Humidity", "scales": "$SCALES:humidity" },
    "0x17": { "label": "Water temperature", "scales": "$SCALES:temperature" },
    "0x01": { "label": "Air temperature", "scales": "$SCALES:temperature" }
}"#;

const SCALES: &str = r#"{
    "temperature": {
        "0x00": { "label": "Celsius", "unit": "°C" },
        "0x01": { "label": "Fahrenheit", "unit": "°F" }
    },
    // Relative humidity
    "humidity": {
        "0x00": { "label": "Percentage value", "unit": "%" },
        "0x01": { "label": "Absolute humidity", "unit": "g/m³" }
    }
}"#;

fn mock_documents(server: &mut ServerGuard, sensor_types: &str) -> (SourceConfig, Mock, Mock) {
    let source = SourceConfig {
        raw_base_url: server.url(),
        ..SourceConfig::default()
    };
    let m1 = server
        .mock("GET", source.sensor_types_url().unwrap().path())
        .with_body(sensor_types)
        .create();
    let m2 = server
        .mock("GET", source.scales_url().unwrap().path())
        .with_body(SCALES)
        .create();
    (source, m1, m2)
}

fn config_for(source: SourceConfig, destination: &Path) -> GeneratorConfig {
    GeneratorConfig {
        source,
        destination: destination.to_path_buf(),
        run_formatter: false,
        run_vcs_check: false,
        ..GeneratorConfig::default()
    }
}

#[test]
fn generates_constants_and_keeps_hand_written_code() {
    let mut server = Server::new();
    let (source, m1, m2) = mock_documents(&mut server, SENSOR_TYPES);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    fs::write(&destination, SEED_FILE).unwrap();

    command::generate_file(&config_for(source, &destination)).unwrap();
    m1.assert();
    m2.assert();

    let text = fs::read_to_string(&destination).unwrap();
    assert!(text.contains(r#"pub const DISTANCE_FT_M_PROPERTY: &str = "Distance (ft/m)";"#));
    assert!(text.contains("    pub const BOILER_WATER_TEMPERATURE: Self = Self(60);"));
    assert!(text.contains("pub struct HumidityScale(pub u8);"));
    assert!(text.contains(
        "    (MultilevelSensorType::WATER_TEMPERATURE, MultilevelSensorScaleKind::TemperatureScale),"
    ));
    assert!(text.contains(
        "pub const UNIT_CELSIUS: &[MultilevelSensorScaleType] = &[\n    \
         MultilevelSensorScaleType::BoilerWaterTemperatureScale(BoilerWaterTemperatureScale::CELSIUS),\n    \
         MultilevelSensorScaleType::TemperatureScale(TemperatureScale::CELSIUS),\n];"
    ));

    let hand_written = SEED_FILE.split(END_MARKER).nth(1).unwrap();
    let hand_written = &hand_written[hand_written.find("impl MultilevelSensorType").unwrap()..];
    assert!(text.ends_with(hand_written));
    assert_eq!(text.matches(END_MARKER).count(), 1);
}

#[test]
fn second_run_is_byte_identical() {
    let mut server = Server::new();
    let (source, _m1, _m2) = mock_documents(&mut server, SENSOR_TYPES);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    fs::write(&destination, SEED_FILE).unwrap();
    let config = config_for(source, &destination);

    command::generate_file(&config).unwrap();
    let first = fs::read(&destination).unwrap();
    command::generate_file(&config).unwrap();
    let second = fs::read(&destination).unwrap();
    assert_eq!(first, second);
}

#[test]
fn input_key_order_does_not_matter() {
    let dir = tempfile::tempdir().unwrap();
    let mut outputs = vec![];
    for sensor_types in [SENSOR_TYPES, SENSOR_TYPES_REORDERED] {
        let mut server = Server::new();
        let (source, _m1, _m2) = mock_documents(&mut server, sensor_types);
        let destination = dir.path().join("multilevel_sensor.rs");
        fs::write(&destination, SEED_FILE).unwrap();
        command::generate_file(&config_for(source, &destination)).unwrap();
        outputs.push(fs::read_to_string(&destination).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn missing_marker_leaves_file_untouched() {
    let mut server = Server::new();
    let (source, _m1, _m2) = mock_documents(&mut server, SENSOR_TYPES);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    let corrupted = SEED_FILE.replace(END_MARKER, "END OF GENERATED STUFF");
    fs::write(&destination, &corrupted).unwrap();

    let err = command::generate_file(&config_for(source, &destination)).unwrap_err();
    assert!(matches!(err, GenerateError::Splice(SpliceError::MissingMarker)));
    assert_eq!(fs::read_to_string(&destination).unwrap(), corrupted);
}

#[test]
fn missing_previous_file_is_an_error() {
    let mut server = Server::new();
    let (source, _m1, _m2) = mock_documents(&mut server, SENSOR_TYPES);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");

    let err = command::generate_file(&config_for(source, &destination)).unwrap_err();
    assert!(matches!(err, GenerateError::ReadPrevious { .. }));
    assert!(!destination.exists());
}

#[test]
fn upstream_failure_aborts_before_writing() {
    let mut server = Server::new();
    let source = SourceConfig {
        raw_base_url: server.url(),
        ..SourceConfig::default()
    };
    let _m = server
        .mock("GET", source.sensor_types_url().unwrap().path())
        .with_status(500)
        .create();
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    fs::write(&destination, SEED_FILE).unwrap();

    let err = command::generate_file(&config_for(source, &destination)).unwrap_err();
    assert!(matches!(err, GenerateError::Fetch(_)));
    assert_eq!(fs::read_to_string(&destination).unwrap(), SEED_FILE);
}

#[test]
fn colliding_labels_abort_before_writing() {
    let mut server = Server::new();
    let (source, _m1, _m2) = mock_documents(
        &mut server,
        r#"{
            "0x01": { "label": "Temperature (Air)", "scales": "$SCALES:temperature" },
            "0x17": { "label": "Temperature (Water)", "scales": "$SCALES:temperature" }
        }"#,
    );
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    fs::write(&destination, SEED_FILE).unwrap();

    let err = command::generate_file(&config_for(source, &destination)).unwrap_err();
    assert!(err.to_string().contains("TEMPERATURE"));
    assert_eq!(fs::read_to_string(&destination).unwrap(), SEED_FILE);
}

#[test]
fn post_write_steps_can_be_disabled() {
    let mut server = Server::new();
    let (source, _m1, _m2) = mock_documents(&mut server, SENSOR_TYPES);
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("multilevel_sensor.rs");
    fs::write(&destination, SEED_FILE).unwrap();

    let report = command::generate(&config_for(source, &destination)).unwrap();
    assert!(!report.fails_run());
}

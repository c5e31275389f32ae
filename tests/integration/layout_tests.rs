//! Integration tests for the ring layout generator.

use ledring::config::LayoutConfig;
use ledring::layout::RingLayout;

fn render(config: LayoutConfig) -> String {
    let layout = RingLayout::new(config).unwrap();
    let mut buf = Vec::new();
    layout.write_lines(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn default_ring_first_and_last_records() {
    let text = render(LayoutConfig::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 119);
    assert_eq!(
        lines[0],
        r#"{ "type": "wokwi-neopixel", "id": "rgb1", "top": -499.3, "left": 26.2, "rotate": -177.0, "attrs": { } },"#
    );
    assert_eq!(
        lines[118],
        r#"[ "rgb59:DOUT", "rgb60:DIN", "green", [ "h0" ] ],"#
    );
    assert!(text.ends_with(",\n"));
}

#[test]
fn wires_chain_consecutive_pixels() {
    let layout = RingLayout::new(LayoutConfig {
        count: 5,
        ..LayoutConfig::default()
    })
    .unwrap();
    let pairs: Vec<(String, String)> = layout.wires().map(|w| (w.from, w.to)).collect();
    assert_eq!(
        pairs,
        vec![
            ("rgb1:DOUT".to_string(), "rgb2:DIN".to_string()),
            ("rgb2:DOUT".to_string(), "rgb3:DIN".to_string()),
            ("rgb3:DOUT".to_string(), "rgb4:DIN".to_string()),
            ("rgb4:DOUT".to_string(), "rgb5:DIN".to_string()),
        ]
    );
}

#[test]
fn custom_vocabulary_reaches_every_record() {
    let text = render(LayoutConfig {
        count: 3,
        part_type: "wokwi-led-ring".into(),
        id_prefix: "px".into(),
        wire_colour: "blue".into(),
        ..LayoutConfig::default()
    });
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[..3].iter().all(|l| l.contains(r#""type": "wokwi-led-ring""#)));
    assert!(lines[2].contains(r#""id": "px3""#));
    assert_eq!(lines[4], r#"[ "px2:DOUT", "px3:DIN", "blue", [ "h0" ] ],"#);
}

#[test]
fn config_file_drives_layout() {
    let config: LayoutConfig =
        serde_json::from_str(r#"{ "count": 4, "amplitude": 10.0, "phase_deg": 0.0, "start_deg": 0.0 }"#)
            .unwrap();
    let layout = RingLayout::new(config).unwrap();
    let first = layout.placements().next().unwrap();
    assert!((first.left - 10.0).abs() < 1e-9);
    assert!(first.top.abs() < 1e-9);
    assert!((first.rotate() + 180.0).abs() < 1e-9);
}

#[test]
fn diagram_document_lists_all_parts_and_connections() {
    let layout = RingLayout::new(LayoutConfig::default()).unwrap();
    let v = serde_json::to_value(layout.diagram()).unwrap();
    assert_eq!(v["author"], "ledring");
    assert_eq!(v["parts"].as_array().unwrap().len(), 60);
    assert_eq!(v["connections"].as_array().unwrap().len(), 59);
    assert_eq!(v["parts"][0]["top"], -499.3);
    assert_eq!(v["parts"][0]["left"], 26.2);
}

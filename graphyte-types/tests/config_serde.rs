use graphyte_types::{
    Aggregation, AnalysisOptions, ClientCert, DayWindow, GraphiteConfig, GraphyteConfig,
    RenderFormat,
};

#[test]
fn graphite_config_roundtrip() {
    let cfg = GraphiteConfig {
        host: "https://graphite.example.com/render".to_string(),
        client_cert: Some(ClientCert {
            cert_pem: "/etc/graphyte/client.crt".into(),
            key_pem: "/etc/graphyte/client.key".into(),
        }),
        accept_invalid_certs: true,
        format: RenderFormat::Json,
    };

    let json = serde_json::to_string(&cfg).expect("serialize graphite config");
    let de: GraphiteConfig = serde_json::from_str(&json).expect("deserialize graphite config");
    assert_eq!(de, cfg);
}

#[test]
fn aggregation_serializes_lowercase() {
    let json = serde_json::to_string(&Aggregation::Median).unwrap();
    assert_eq!(json, "\"median\"");
    let de: Aggregation = serde_json::from_str("\"sum\"").unwrap();
    assert_eq!(de, Aggregation::Sum);
}

#[test]
fn analysis_options_roundtrip_with_timezone() {
    let opts = AnalysisOptions::raw()
        .resample(300, Aggregation::Max)
        .day_window(
            DayWindow::new(9, 17)
                .unwrap()
                .with_timezone(chrono_tz::Europe::Berlin)
                .weekdays_only(true),
        );
    let json = serde_json::to_string(&opts).unwrap();
    let de: AnalysisOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(de, opts);
    assert_eq!(de.day_window.timezone, Some(chrono_tz::Europe::Berlin));
}

#[test]
fn graphyte_config_defaults() {
    let cfg = GraphyteConfig::default();
    assert_eq!(cfg.fetch_timeout.as_secs(), 10);
    assert_eq!(cfg.default_options.aggregation, Aggregation::Mean);
    assert!(cfg.default_options.day_window.is_disabled());

    let json = serde_json::to_string(&cfg).unwrap();
    let de: GraphyteConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(de.fetch_timeout, cfg.fetch_timeout);
}

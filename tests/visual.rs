use kira_tumornet::config::NetworkConfig;
use kira_tumornet::graph::visual::{edge_width, node_size};

#[test]
fn node_size_hits_both_endpoints() {
    let config = NetworkConfig::default();
    assert!((node_size(config.min_correlation, &config) - config.node_size.min).abs() < 1e-9);
    assert!((node_size(1.0, &config) - config.node_size.max).abs() < 1e-9);
}

#[test]
fn node_size_is_monotone_in_correlation() {
    let config = NetworkConfig::default();
    let mut previous = f64::NEG_INFINITY;
    let mut c = config.min_correlation;
    while c <= 1.0 {
        let size = node_size(c, &config);
        assert!(size >= previous);
        previous = size;
        c += 0.01;
    }
}

#[test]
fn node_size_respects_a_nonzero_floor() {
    let config = NetworkConfig {
        min_correlation: -0.5,
        ..NetworkConfig::default()
    };
    assert!((node_size(-0.5, &config) - config.node_size.min).abs() < 1e-9);
    assert!((node_size(1.0, &config) - config.node_size.max).abs() < 1e-9);
}

#[test]
fn edge_width_scales_from_threshold() {
    let config = NetworkConfig::default();
    assert!((edge_width(config.min_correlation, &config) - config.edge_width.min).abs() < 1e-9);

    let expected = config.edge_width.min + (1.0 - config.min_correlation) * config.edge_width.span();
    assert!((edge_width(1.0, &config) - expected).abs() < 1e-9);
}

use crate::config::NetworkConfig;

/// Node size grows linearly from `size.min` at the correlation threshold to
/// exactly `size.max` at PCC 1.0. Callers guarantee `pcc >= min_correlation`
/// (the loader filter) and config validation rejects `min_correlation == 1`.
pub fn node_size(pcc: f64, config: &NetworkConfig) -> f64 {
    config.node_size.min
        + (pcc - config.min_correlation) * config.node_size.span()
            / (1.0 - config.min_correlation)
}

pub fn edge_width(pcc: f64, config: &NetworkConfig) -> f64 {
    config.edge_width.min + (pcc - config.min_correlation) * config.edge_width.span()
}

use env_logger::Builder;
use log::LevelFilter;

/// Log level for the `--verbose` flag.
fn level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

pub fn init_logging(verbose: bool) {
    Builder::new()
        .filter_level(level(verbose))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // The logger can only be installed once per process, so only the level
    // selection is tested here.

    #[test]
    fn test_level_verbose_is_debug() {
        assert_eq!(level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_level_default_is_info() {
        assert_eq!(level(false), LevelFilter::Info);
    }
}

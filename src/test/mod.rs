use log::LevelFilter;
use simplelog::{Config, TestLogger};


/// Routes the crate's logs into the test harness' captured output. Safe to call from every test.
pub(crate) fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

mod tests {
    use log::{debug, trace};

    use super::init_logging;
    use crate::BinarySearchTree;

    #[test]
    fn logging_installs_once() {
        init_logging();
        init_logging();
        assert!(log::log_enabled!(log::Level::Trace));

        debug!("logger installed");
        let mut tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
        trace!("removing the root of {:?}", tree);
        assert!(tree.remove(&2));
    }
}

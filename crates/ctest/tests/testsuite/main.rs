mod fixtures;
mod mixed_bag;
mod over_limit;
mod stray_abort;
mod util;

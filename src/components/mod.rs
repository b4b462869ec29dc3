pub mod header;
pub mod poster_card;
pub mod progress_bar;
pub mod versus;

#[allow(unused_imports)]
pub use header::*;
#[allow(unused_imports)]
pub use poster_card::*;
#[allow(unused_imports)]
pub use progress_bar::*;
#[allow(unused_imports)]
pub use versus::*;

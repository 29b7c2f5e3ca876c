pub mod gaca;
pub mod home;
pub mod mawani;
pub mod mtls;
pub mod rga;
pub mod sar;
pub mod spl;
pub mod tga;

pub use gaca::GacaDashboard;
pub use home::HomePage;
pub use mawani::MawaniDashboard;
pub use mtls::MtlsDashboard;
pub use rga::RgaDashboard;
pub use sar::SarDashboard;
pub use spl::SplDashboard;
pub use tga::TgaDashboard;

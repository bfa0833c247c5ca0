mod mock_header;
mod test_stub;

pub use mock_header::{MOCK_BASE_CLASS, MockHeader};
pub use test_stub::TestStub;

use mockall::*;

use its_core::*;

mock! {
    pub SaltGenerator {}

    impl SaltSource for SaltGenerator {
        fn next_salt(&self) -> Salt;
    }
}

pub type MockSaltSource = MockSaltGenerator;

impl std::fmt::Debug for MockSaltGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockSaltSource")
    }
}

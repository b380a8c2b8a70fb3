pub mod application {
    pub mod catalog {
        pub mod controller;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod value_objects;
    }
    pub mod shared {
        pub mod value_objects;
    }
}

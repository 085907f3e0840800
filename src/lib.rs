pub mod shared {
    pub mod core {
        pub mod cancellation;
    }
    pub mod infrastructure {
        pub mod logging;
        pub mod partitioned_store;
    }
}

pub mod modules {
    pub mod calendar {
        pub mod core {
            pub mod errors;
            pub mod event;
            pub mod ports;
            pub mod windows;
        }
        pub mod use_cases {
            pub mod calendar_use_case;
            pub mod errors;
            pub mod create_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod dates;
                pub mod graphql;
                pub mod http;
            }
            pub mod outbound {
                pub mod in_memory_calendar_repository;
            }
        }
    }
}

pub mod shell;

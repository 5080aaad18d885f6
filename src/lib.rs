pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod document_store;
        pub mod http;
        pub mod security;
    }
}

pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod session;
            pub mod user;
        }
        pub mod use_cases {
            pub mod signup {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod login {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_friends {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_friend {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod fields;
            pub mod ports;
            pub mod response;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_event {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod move_participant {
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_event {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod auth_flow_tests;
        pub mod event_lifecycle_tests;
    }
}

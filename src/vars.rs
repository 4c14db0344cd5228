macro_rules! env_config {
    ($name:ident, $env_key:expr, $default:expr) => {
        paste::paste! {
            pub static [<ELASTIC_ $name>]: ::std::sync::LazyLock<&'static str> = ::std::sync::LazyLock::new(|| {
                ::std::boxed::Box::leak(
                    ::std::env::var($env_key)
                        .unwrap_or_else(|_| $default.to_string())
                        .into_boxed_str()
                )
            });
        }
    };
    ($name:ident, $default:expr) => {
        paste::paste! {
            env_config!($name, stringify!([<ELASTIC_ $name>]), $default);
        }
    };
}

// 读取前需先加载 .env 文件
env_config!(CLOUD_ID, "");
env_config!(API_KEY, "");

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

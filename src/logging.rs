use env_logger::Env;

/// ロガーを初期化します。
///
/// 既定のレベルは `info` (`verbose` なら `debug`) で、環境変数 `RUST_LOG` で上書きできます。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format_timestamp(None).format_target(false);

    // テストなどで二重に初期化されても失敗させない
    let _ = builder.try_init();
}

// Installs the global tracing subscriber. Dev mode logs plain, colored lines next to the
// console output; otherwise every record is a single JSON object.
pub fn setup_tracing(dev_mode: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(if dev_mode { tracing::Level::DEBUG } else { tracing::Level::INFO })
        // disable printing the name of the module in every log line.
        .with_target(false);
    if dev_mode {
        builder.with_ansi(true).init();
    } else {
        builder.with_ansi(false).without_time().json().init();
    }
}

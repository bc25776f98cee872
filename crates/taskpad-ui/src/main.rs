#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
//! Browser entry point for the Taskpad web client.

#[cfg(target_arch = "wasm32")]
fn main() {
    taskpad_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write;

    writeln!(
        std::io::stderr(),
        "taskpad-ui {} only runs in the browser; serve it with `trunk serve`.",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    #[test]
    fn native_stub_exits_cleanly() -> std::io::Result<()> {
        super::main()
    }
}

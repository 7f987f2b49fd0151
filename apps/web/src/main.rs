//! Browser entry point. `dioxus::launch` installs the `tracing` logger (browser console)
//! and mounts [`epyl_ui::App`] on `#main`.

fn main() {
    dioxus::launch(epyl_ui::App);
}

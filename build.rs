//! Retrieves information about the crate version from Git and the build
//! environment so that the `kibitz` binary can report how it was built.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}

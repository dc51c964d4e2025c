use std::io::Result;
fn main() -> Result<()> {
    // Proto compilation rules for the preference store wire format
    let mut config = prost_build::Config::new();
    config.bytes(["Value.bytes_array"]);
    config.compile_protos(&["src/wire.proto"], &["src/"])?;
    Ok(())
}

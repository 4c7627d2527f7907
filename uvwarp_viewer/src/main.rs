use anyhow::Result;

pub fn main() -> Result<()> {
    uvwarp_viewer_lib::main_fun()
}

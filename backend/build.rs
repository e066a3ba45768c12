use std::fs;
use std::path::Path;

fn main() {
    let out_dir = Path::new("static");
    let site_dir = Path::new("site");
    let dist_dir = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(out_dir);
    fs::create_dir_all(out_dir).unwrap();

    let options = fs_extra::dir::CopyOptions::new()
        .overwrite(true)
        .content_only(true);

    // Hand-written pages first, then the trunk bundle on top of them.
    fs_extra::dir::copy(site_dir, out_dir, &options).unwrap();
    if dist_dir.exists() {
        fs_extra::dir::copy(dist_dir, out_dir, &options).unwrap();
    }

    println!("cargo:rerun-if-changed=site");
    println!("cargo:rerun-if-changed=../frontend/dist");
}

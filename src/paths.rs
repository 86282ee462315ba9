/// Extensions the ICT import accepts, compared case-insensitively.
pub const NFS_EXTENSIONS: [&str; 2] = [".txt", ".nfs"];

/// Last four characters of `path`, or the whole path if it is shorter.
pub fn path_ending(path: &str) -> &str {
    match path.char_indices().rev().nth(3) {
        Some((idx, _)) => &path[idx..],
        None => path,
    }
}

pub fn has_nfs_extension(path: &str) -> bool {
    let ending = path_ending(path);
    NFS_EXTENSIONS
        .iter()
        .any(|ext| ending.eq_ignore_ascii_case(ext))
}

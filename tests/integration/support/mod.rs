pub mod profile_files;

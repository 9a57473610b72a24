pub mod coding_profiles;

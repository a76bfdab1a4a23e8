pub mod system_manifest;

pub mod permission_groups;

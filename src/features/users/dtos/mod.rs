mod profile_dto;

pub use profile_dto::{ProfileResponseDto, UpdateUserDto, UserListParams};

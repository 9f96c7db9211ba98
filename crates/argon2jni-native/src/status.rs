use argon2jni_core::primitive::Status;

/// Diagnostic text for a status code, as the reference library words it.
pub fn error_message(status: Status) -> &'static str {
    match status {
        Status::OK => "OK",
        Status::OUTPUT_PTR_NULL => "Output pointer is NULL",
        Status::OUTPUT_TOO_SHORT => "Output is too short",
        Status::OUTPUT_TOO_LONG => "Output is too long",
        Status::PWD_TOO_SHORT => "Password is too short",
        Status::PWD_TOO_LONG => "Password is too long",
        Status::SALT_TOO_SHORT => "Salt is too short",
        Status::SALT_TOO_LONG => "Salt is too long",
        Status::AD_TOO_SHORT => "Associated data is too short",
        Status::AD_TOO_LONG => "Associated data is too long",
        Status::SECRET_TOO_SHORT => "Secret is too short",
        Status::SECRET_TOO_LONG => "Secret is too long",
        Status::TIME_TOO_SMALL => "Time cost is too small",
        Status::TIME_TOO_LARGE => "Time cost is too large",
        Status::MEMORY_TOO_LITTLE => "Memory cost is too small",
        Status::MEMORY_TOO_MUCH => "Memory cost is too large",
        Status::LANES_TOO_FEW => "Too few lanes",
        Status::LANES_TOO_MANY => "Too many lanes",
        Status::PWD_PTR_MISMATCH => "Password pointer is NULL, but password length is not 0",
        Status::SALT_PTR_MISMATCH => "Salt pointer is NULL, but salt length is not 0",
        Status::SECRET_PTR_MISMATCH => "Secret pointer is NULL, but secret length is not 0",
        Status::AD_PTR_MISMATCH => "Associated data pointer is NULL, but ad length is not 0",
        Status::MEMORY_ALLOCATION_ERROR => "Memory allocation error",
        Status::FREE_MEMORY_CBK_NULL => "The free memory callback is NULL",
        Status::ALLOCATE_MEMORY_CBK_NULL => "The allocate memory callback is NULL",
        Status::INCORRECT_PARAMETER => "Argon2_Context context is NULL",
        Status::INCORRECT_TYPE => "There is no such version of Argon2",
        Status::OUT_PTR_MISMATCH => "Output pointer mismatch",
        Status::THREADS_TOO_FEW => "Not enough threads",
        Status::THREADS_TOO_MANY => "Too many threads",
        Status::MISSING_ARGS => "Missing arguments",
        Status::ENCODING_FAIL => "Encoding failed",
        Status::DECODING_FAIL => "Decoding failed",
        Status::THREAD_FAIL => "Threading failure",
        Status::DECODING_LENGTH_FAIL => "Some of encoded parameters are too long or too short",
        Status::VERIFY_MISMATCH => "The password does not match the supplied hash",
        _ => "Unknown error code",
    }
}

/// Maps a parameter rejection of the hashing engine onto the status code
/// the reference library reports for the same condition.
pub(crate) fn from_engine_error(err: argon2::Error) -> Status {
    match err {
        argon2::Error::AdTooLong => Status::AD_TOO_LONG,
        argon2::Error::AlgorithmInvalid | argon2::Error::VersionInvalid => Status::INCORRECT_TYPE,
        argon2::Error::MemoryTooLittle => Status::MEMORY_TOO_LITTLE,
        argon2::Error::MemoryTooMuch => Status::MEMORY_TOO_MUCH,
        argon2::Error::OutputTooShort => Status::OUTPUT_TOO_SHORT,
        argon2::Error::OutputTooLong => Status::OUTPUT_TOO_LONG,
        argon2::Error::PwdTooLong => Status::PWD_TOO_LONG,
        argon2::Error::SaltTooShort => Status::SALT_TOO_SHORT,
        argon2::Error::SaltTooLong => Status::SALT_TOO_LONG,
        argon2::Error::SecretTooLong => Status::SECRET_TOO_LONG,
        argon2::Error::ThreadsTooFew => Status::LANES_TOO_FEW,
        argon2::Error::ThreadsTooMany => Status::LANES_TOO_MANY,
        argon2::Error::TimeTooSmall => Status::TIME_TOO_SMALL,
        _ => Status::INCORRECT_PARAMETER,
    }
}

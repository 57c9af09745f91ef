// Mirrors the table created by the compression pipeline. Never migrated from here.

diesel::table! {
    compress_jobs (source_path) {
        source_path -> Text,
        size -> BigInt,
        mtime_ms -> BigInt,
        partial_sha256 -> Text,
        output_path -> Nullable<Text>,
        status -> Text,
        last_error -> Nullable<Text>,
        updated_at -> BigInt,
    }
}

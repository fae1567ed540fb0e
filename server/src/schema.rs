diesel::table! {
    recipes (id) {
        id -> BigInt,
        title -> Text,
        description -> Nullable<Text>,
        created_at -> Timestamp,
    }
}

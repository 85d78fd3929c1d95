diesel::table! {
    users (id) {
        id -> Text,
        name -> Text,
        email -> Text,
        phone_number -> Text,
        password -> Text,
    }
}

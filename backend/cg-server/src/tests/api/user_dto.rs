use crate::{USERS_PATH, UserDto, UserListResponse, user_self_link};

use cg_core::User;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_plain_ids_when_represented_then_self_link_is_prefix_plus_id() {
    for (username, provider, scheme) in [
        ("billysteve", "Google", "OAuth2"),
        ("bob", "GitHub", "OAuth2"),
        ("helena", "Heroku", "LDAP"),
    ] {
        let dto = UserDto::from(User::new(username.into(), provider.into(), scheme.into()));

        assert_that!(dto.links.self_link, eq(&format!("{}/{}", USERS_PATH, dto.id)));
    }
}

#[test]
fn given_reserved_characters_in_id_when_linked_then_id_is_escaped() {
    assert_that!(
        user_self_link("LDAP-corp/ou-jane doe").as_str(),
        eq("/chronograf/v1/users/LDAP-corp%2Fou-jane%20doe")
    );
}

#[test]
fn given_user_when_serialized_then_exact_key_set_and_order() {
    let dto = UserDto::from(User::new(
        "billysteve".into(),
        "Google".into(),
        "OAuth2".into(),
    ));

    let serialized = serde_json::to_string(&dto).unwrap();

    assert_that!(
        serialized.as_str(),
        eq(r#"{"id":"OAuth2-Google-billysteve","username":"billysteve","provider":"Google","scheme":"OAuth2","links":{"self":"/chronograf/v1/users/OAuth2-Google-billysteve"}}"#)
    );
}

#[test]
fn given_representation_when_decoded_then_store_values_round_trip() {
    let user = User::new("helena".into(), "Heroku".into(), "LDAP".into());

    let value = serde_json::to_value(UserDto::from(user.clone())).unwrap();
    let decoded: User = serde_json::from_value(value).unwrap();

    assert_that!(decoded, eq(&user));
}

#[test]
fn given_fetched_and_created_users_with_same_fields_then_serialize_identically() {
    let fetched = User {
        id: "OAuth2-GitHub-bob".into(),
        username: "bob".into(),
        provider: "GitHub".into(),
        scheme: "OAuth2".into(),
    };
    let created = User::new("bob".into(), "GitHub".into(), "OAuth2".into());

    assert_that!(UserDto::from(fetched), eq(&UserDto::from(created)));
}

#[test]
fn given_users_when_listed_then_collection_link_and_members() {
    let response = UserListResponse::from(vec![User::new(
        "bob".into(),
        "GitHub".into(),
        "OAuth2".into(),
    )]);

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({
            "users": [{
                "id": "OAuth2-GitHub-bob",
                "username": "bob",
                "provider": "GitHub",
                "scheme": "OAuth2",
                "links": {"self": "/chronograf/v1/users/OAuth2-GitHub-bob"}
            }],
            "links": {"self": "/chronograf/v1/users"}
        })
    );
}

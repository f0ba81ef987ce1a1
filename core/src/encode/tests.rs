use super::*;
use crate::types::Security;

mod url {
    use super::*;

    #[test]
    fn passes_through_http_prefixed_input() {
        for url in ["http://example.com", "https://example.com/a?b=c", "httpbin.org"] {
            assert_eq!(encode_url(url), url);
        }
    }

    #[test]
    fn prefixes_anything_else_with_https() {
        assert_eq!(encode_url("example.com"), "https://example.com");
        assert_eq!(encode_url("www.rust-lang.org"), "https://www.rust-lang.org");
        assert_eq!(encode_url("ftp://files"), "https://ftp://files");
    }
}

mod email {
    use super::*;

    #[test]
    fn bare_address() {
        assert_eq!(encode_email("a@b.com", None, None), "mailto:a@b.com");
    }

    #[test]
    fn subject_and_body_are_percent_encoded() {
        assert_eq!(
            encode_email("a@b.com", Some("Hi"), Some("Body text")),
            "mailto:a@b.com?subject=Hi&body=Body%20text"
        );
    }

    #[test]
    fn absent_components_are_omitted() {
        assert_eq!(
            encode_email("a@b.com", Some("Hi there"), None),
            "mailto:a@b.com?subject=Hi%20there"
        );
        assert_eq!(
            encode_email("a@b.com", None, Some("x&y=z")),
            "mailto:a@b.com?body=x%26y%3Dz"
        );
    }

    #[test]
    fn empty_components_count_as_absent() {
        assert_eq!(encode_email("a@b.com", Some(""), None), "mailto:a@b.com");
        assert_eq!(encode_email("a@b.com", Some(""), Some("")), "mailto:a@b.com");
        assert_eq!(
            encode_email("a@b.com", Some(""), Some("hi")),
            "mailto:a@b.com?body=hi"
        );
    }
}

#[test]
fn sms_appends_body_only_when_present() {
    assert_eq!(encode_sms("5551234", None), "sms:5551234");
    assert_eq!(
        encode_sms("5551234", Some("On my way!")),
        "sms:5551234?body=On%20my%20way!"
    );
    assert_eq!(encode_sms("555", Some("")), "sms:555");
}

#[test]
fn phone_and_text() {
    assert_eq!(encode_phone("+1 555 1234"), "tel:+1 555 1234");
    assert_eq!(encode_text("anything goes;\n"), "anything goes;\n");
}

#[test]
fn contact_is_a_fixed_vcard() {
    let contact = ContactData {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        organization: "Analytical; Engines".to_string(),
        phone: "555".to_string(),
        email: "ada@example.com".to_string(),
        url: String::new(),
    };

    assert_eq!(
        encode_contact(&contact),
        "BEGIN:VCARD\nVERSION:3.0\nFN:Ada Lovelace\nORG:Analytical; Engines\nTEL:555\n\
         EMAIL:ada@example.com\nURL:\nEND:VCARD"
    );
}

mod wifi {
    use super::*;

    #[test]
    fn matches_the_wifi_convention_exactly() {
        let wifi = WifiData {
            ssid: "Home".to_string(),
            password: "pw123".to_string(),
            security: Security::Wpa,
            hidden: false,
        };
        assert_eq!(encode_wifi(&wifi), "WIFI:T:WPA;S:Home;P:pw123;H:false;;");
    }

    #[test]
    fn open_hidden_network() {
        let wifi = WifiData {
            ssid: "Lab".to_string(),
            password: String::new(),
            security: Security::NoPass,
            hidden: true,
        };
        assert_eq!(encode_wifi(&wifi), "WIFI:T:nopass;S:Lab;P:;H:true;;");
    }
}

#[test]
fn event_strips_separators_and_appends_seconds() {
    let event = EventData {
        title: "Launch".to_string(),
        start_date: "2024-05-01T09:30".to_string(),
        end_date: "2024-05-01T11:00".to_string(),
        location: "Room 1".to_string(),
        description: "Bring snacks".to_string(),
    };

    assert_eq!(
        encode_event(&event),
        "BEGIN:VEVENT\nDTSTART:20240501T093000Z\nDTEND:20240501T110000Z\nSUMMARY:Launch\n\
         LOCATION:Room 1\nDESCRIPTION:Bring snacks\nEND:VEVENT"
    );
}

#[test]
fn event_timestamp_with_seconds_is_not_corrected() {
    assert_eq!(ical_timestamp("2024-05-01T09:30:15"), "20240501T09301500Z");
    assert_eq!(ical_timestamp(""), "00Z");
}

mod location {
    use super::*;

    #[test]
    fn coordinates_win_when_both_present() {
        let location = LocationData {
            latitude: "40.7128".to_string(),
            longitude: "-74.0060".to_string(),
            query: "ignored".to_string(),
        };
        assert_eq!(encode_location(&location), "geo:40.7128,-74.0060");
    }

    #[test]
    fn falls_back_to_query() {
        let location = LocationData {
            query: "New York".to_string(),
            ..Default::default()
        };
        assert_eq!(encode_location(&location), "geo:0,0?q=New%20York");

        let half = LocationData {
            latitude: "1".to_string(),
            query: "Café".to_string(),
            ..Default::default()
        };
        assert_eq!(encode_location(&half), "geo:0,0?q=Caf%C3%A9");
    }
}

#[test]
fn social_uses_platform_table() {
    assert_eq!(encode_social("twitter", "@rustlang"), "https://twitter.com/rustlang");
    assert_eq!(encode_social("facebook", "page"), "https://facebook.com/page");
    assert_eq!(encode_social("instagram", "pic"), "https://instagram.com/pic");
    assert_eq!(encode_social("linkedin", "ada"), "https://linkedin.com/in/ada");
    assert_eq!(encode_social("youtube", "@chan"), "https://youtube.com/@chan");
    assert_eq!(encode_social("myspace", "tom"), "https://twitter.com/tom");
}

#[test]
fn social_platform_keys_are_case_sensitive() {
    assert_eq!(encode_social("Facebook", "page"), "https://twitter.com/page");
    assert_eq!(encode_social("INSTAGRAM", "pic"), "https://twitter.com/pic");
}

#[test]
fn social_strips_only_a_leading_at() {
    assert_eq!(encode_social("twitter", "a@b"), "https://twitter.com/a@b");
    assert_eq!(encode_social("twitter", "@@x"), "https://twitter.com/@x");
}

#[test]
fn component_encoding_matches_uri_component_rules() {
    assert_eq!(
        percent_encode_component("AZaz09-_.!~*'()"),
        "AZaz09-_.!~*'()"
    );
    assert_eq!(percent_encode_component(" /?#&=+"), "%20%2F%3F%23%26%3D%2B");
}

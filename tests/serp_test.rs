//! End-to-end extraction over a realistic results page.

#![allow(clippy::expect_used)]

use yandex_serp::{parse_serp, parse_serp_with_options, Error, Options, PageState, SerpDocument};

const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html class="i-ua_js_no">
<head>
<meta charset="utf-8">
<title>rust programming — Яндекс: нашлось 2 млн результатов</title>
<script>window.serp={"query":"rust programming","found":"&mdash;&nbsp;2 млн ответов","reqid":"1234"};</script>
</head>
<body>
<form class="search2" action="/search/"><input type="hidden" name="rstr" value="-213"><input name="text" value="rust programming"></form>
<div class="content">
<ul class="serp-list serp-list_left_yes">
  <li class="serp-item serp-adv__item" data-cid="0">
    <h2 class="serp-item__title"><a href="http://an.yandex.ru/count/abc">Rust courses online</a></h2>
    <div class="serp-item__text">Sponsored</div>
  </li>
  <li class="serp-item serp-item_plain_yes" data-cid="1">
    <h2 class="serp-item__title"><a class="link" href="https://www.rust-lang.org/">Rust Programming Language</a></h2>
    <div class="serp-item__greenurl">rust-lang.org</div>
    <div class="serp-item__text">A language empowering everyone to build reliable and efficient software.</div>
    <div class="popup2 popup2_theme_normal"><a href="http://hghltd.yandex.net/yandbtm?url=https%3A%2F%2Fwww.rust-lang.org%2F">Сохранённая копия</a></div>
  </li>
  <li class="serp-item serp-item_card_images" data-cid="2">
    <h2 class="serp-item__title"><a href="http://images.yandex.ru/yandsearch?text=rust">Rust — картинки</a></h2>
  </li>
  <li class="serp-item" data-cid="3">
    <h2 class="serp-item__title"><a href="http://maps.yandex.ru/?text=rust%20meetup">Rust meetup на карте</a></h2>
    <div class="serp-item__data">Москва, ул. Льва Толстого, 16</div>
  </li>
  <li class="serp-item serp-item_plain_yes" data-cid="4">
    <h2 class="serp-item__title"><a href="/search/infected?url=http%3A%2F%2Frust-cracks.example%2Fdownload&amp;fmode=envelope">Rust free download</a></h2>
  </li>
  <li class="serp-item serp-item_plain_yes" data-cid="5">
    <h2 class="serp-item__title"><a href="https://vk.com/rustlang">Rust | ВКонтакте</a></h2>
    <div class="social-snippet2"><div class="social-snippet2__text">Сообщество разработчиков на Rust</div></div>
  </li>
</ul>
<div class="pager"><span class="pager__group"><a href="/search/?p=1">2</a></span></div>
</div>
</body>
</html>"#;

#[test]
fn full_page_count_and_positions() {
    let serp = parse_serp(RESULTS_PAGE).expect("valid page");

    assert_eq!(serp.page_count, Some(2_000_000));
    let positions: Vec<u32> = serp.snippets.iter().map(|s| s.position).collect();
    // ad skipped without a position, image card consumes position 2
    assert_eq!(positions, vec![1, 3, 4, 5]);
}

#[test]
fn full_page_snippet_fields() {
    let serp = parse_serp(RESULTS_PAGE).expect("valid page");
    let first = &serp.snippets[0];

    assert_eq!(first.domain, "rust-lang.org");
    assert_eq!(first.url, "https://www.rust-lang.org/");
    assert_eq!(first.title.as_deref(), Some("Rust Programming Language"));
    assert_eq!(
        first.body.as_deref(),
        Some("A language empowering everyone to build reliable and efficient software.")
    );
    assert_eq!(
        first.saved_copy_url.as_deref(),
        Some("http://hghltd.yandex.net/yandbtm?url=https%3A%2F%2Fwww.rust-lang.org%2F")
    );
    assert!(!first.is_map);
    assert!(!first.is_infected);
}

#[test]
fn full_page_map_and_infected_entries() {
    let serp = parse_serp(RESULTS_PAGE).expect("valid page");

    let map = &serp.snippets[1];
    assert!(map.is_map);
    assert_eq!(map.domain, "maps.yandex.ru");
    assert_eq!(map.body.as_deref(), Some("Москва, ул. Льва Толстого, 16"));

    let infected = &serp.snippets[2];
    assert!(infected.is_infected);
    assert_eq!(infected.url, "http://rust-cracks.example/download");
    assert_eq!(infected.domain, "rust-cracks.example");
    assert_eq!(infected.body.as_deref(), Some(""));

    let social = &serp.snippets[3];
    assert_eq!(social.domain, "vk.com");
    assert_eq!(social.body.as_deref(), Some("Сообщество разработчиков на Rust"));
}

#[test]
fn full_page_classification_and_region() {
    let page = SerpDocument::new(RESULTS_PAGE);

    assert_eq!(page.page_state(), PageState::Results);
    assert!(!page.is_not_found());
    assert!(page.has_pagination());
    assert_eq!(page.region_code(0).expect("valid region"), 213);
    assert_eq!(page.captcha().expect("no captcha"), None);
}

#[test]
fn minimal_options_skip_title_and_body() {
    let serp = parse_serp_with_options(RESULTS_PAGE, &Options::minimal()).expect("valid page");

    assert_eq!(serp.snippets.len(), 4);
    for snippet in &serp.snippets {
        assert_eq!(snippet.title, None);
        assert_eq!(snippet.body, None);
        assert!(!snippet.domain.is_empty());
        assert!(!snippet.url.is_empty());
    }
    // saved copy is not gated by options
    assert!(serp.snippets[0].saved_copy_url.is_some());
}

#[test]
fn serialized_record_uses_legacy_layout() {
    let serp = parse_serp(RESULTS_PAGE).expect("valid page");
    let value = serde_json::to_value(&serp).expect("serializable");

    assert_eq!(value["pc"], 2_000_000);
    let first = &value["sn"][0];
    assert_eq!(first["d"], "rust-lang.org");
    assert_eq!(first["domain"], first["d"]);
    assert_eq!(first["p"], 1);
    assert_eq!(first["u"], "https://www.rust-lang.org/");
    assert_eq!(first["m"], false);
    assert_eq!(first["i"], false);
    assert_eq!(first["t"], "Rust Programming Language");
    assert!(value["sn"][2]["savedCopy"].is_null());
}

#[test]
fn not_found_page_yields_zero_record() {
    let html = r#"<html><script>{"found":"&mdash;&nbsp;5 ответов"}</script>
        <div class="misspell">По вашему запросу ничего не нашлось</div>
        <ul class="serp-list"><li class="serp-item"><div>malformed</div></li></ul></html>"#;

    let serp = parse_serp(html).expect("not-found is a valid result");
    assert_eq!(serp.page_count, Some(0));
    assert!(serp.snippets.is_empty());
    assert_eq!(
        serde_json::to_value(&serp).expect("serializable"),
        serde_json::json!({"pc": 0, "sn": []})
    );
}

#[test]
fn only_ads_and_cards_is_empty_serp() {
    let html = r#"<html><script>{"found":"&mdash;&nbsp;40 ответов"}</script>
        <ul class="serp-list">
          <li class="serp-item serp-adv__item"><h2 class="serp-item__title"><a href="http://ad.example/">Ad</a></h2></li>
          <li class="serp-item"><h2 class="serp-item__title"><a href="http://video.yandex.ru/">Video</a></h2></li>
        </ul></html>"#;

    assert!(matches!(parse_serp(html), Err(Error::EmptySerp)));
}

#[test]
fn malformed_item_aborts_extraction() {
    let html = r#"<ul class="serp-list">
          <li class="serp-item serp-item_plain_yes"><h2 class="serp-item__title"><a href="http://a.example/">A</a></h2></li>
          <li class="serp-item serp-item_plain_yes"><h3 class="serp-item__title"><a href="http://b.example/">B</a></h3></li>
        </ul>"#;

    assert!(matches!(parse_serp(html), Err(Error::ParseError(_))));
}

#[test]
fn undecodable_domain_aborts_extraction() {
    let html = r#"<ul class="serp-list">
          <li class="serp-item serp-item_plain_yes"><h2 class="serp-item__title"><a href="http://a.example/">A</a></h2></li>
          <li class="serp-item serp-item_plain_yes"><h2 class="serp-item__title"><a href="http://xn--zz.com/">B</a></h2></li>
        </ul>"#;

    assert!(matches!(parse_serp(html), Err(Error::EncodingError(_))));
    assert!(matches!(
        SerpDocument::new(html).snippets(),
        Err(Error::EncodingError(_))
    ));
}

#[test]
fn undetermined_count_is_not_zero() {
    let html = r#"<ul class="serp-list">
          <li class="serp-item serp-item_plain_yes"><h2 class="serp-item__title"><a href="http://a.example/">A</a></h2></li>
        </ul>"#;

    let serp = parse_serp(html).expect("valid page");
    assert_eq!(serp.page_count, None);
    assert_eq!(serp.snippets.len(), 1);
}

#[test]
fn document_is_shared_across_threads() {
    let page = std::sync::Arc::new(SerpDocument::new(RESULTS_PAGE));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let page = std::sync::Arc::clone(&page);
            std::thread::spawn(move || page.serp().map(|serp| serp.snippets.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread").expect("valid page"), 4);
    }
}

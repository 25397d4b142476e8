mod common;

#[cfg(test)]
pub mod elements_tests {
    use std::collections::BTreeMap;

    use super::common::*;

    use themeweave::elements::*;

    #[test]
    fn test_div_block_render() {
        let div = DivBlock::new(attrs("hero"), "<p>Hi</p>");

        assert_eq!(
            div.render(),
            r#"<div id="hero" class="c" style="s"><p>Hi</p></div>"#
        );
    }

    #[test]
    fn test_text_block_uses_tag() {
        let heading = TextBlock::new(attrs("t"), "Welcome", "h2");

        assert_eq!(
            heading.render(),
            r#"<h2 id="t" class="c" style="s">Welcome</h2>"#
        );
    }

    #[test]
    fn test_text_block_defaults_to_paragraph() {
        let text = TextBlock::new(attrs("t"), "Body", "");

        assert_eq!(
            text.render(),
            r#"<p id="t" class="c" style="s">Body</p>"#
        );
    }

    #[test]
    fn test_list_block_ordered_and_unordered() {
        let items = vec!["one".to_string(), "two".to_string()];

        let unordered = ListBlock::new(attrs("l"), items.clone(), false);
        assert_eq!(
            unordered.render(),
            r#"<ul id="l" class="c" style="s"><li>one</li><li>two</li></ul>"#
        );

        let ordered = ListBlock::new(attrs("l"), items, true);
        assert!(ordered.render().starts_with("<ol "));
        assert!(ordered.render().ends_with("</ol>"));
    }

    #[test]
    fn test_quote_block_cite_is_optional() {
        let cited = QuoteBlock::new(attrs("q"), "Stay hungry", "Jobs");
        assert_eq!(
            cited.render(),
            r#"<blockquote id="q" class="c" style="s">Stay hungry<cite>Jobs</cite></blockquote>"#
        );

        let bare = QuoteBlock::new(attrs("q"), "Stay hungry", "");
        assert!(!bare.render().contains("<cite>"));
    }

    #[test]
    fn test_button_block_render() {
        let button = ButtonBlock::new(attrs("b"), "Book", "/book");

        assert_eq!(
            button.render(),
            r#"<a href="/book" id="b" class="c" style="s">Book</a>"#
        );
    }

    #[test]
    fn test_image_element_link_and_caption() {
        let plain = get_image("house");
        assert_eq!(
            plain.render(),
            r#"<figure id="house" class="c" style="s"><img src="/img/house.jpg" alt="house alt" /></figure>"#
        );

        let linked = ImageElement::new(
            attrs("house"),
            "/img/house.jpg",
            "House",
            "Sold!",
            "/listings/1",
        );
        assert_eq!(
            linked.render(),
            r#"<figure id="house" class="c" style="s"><a href="/listings/1"><img src="/img/house.jpg" alt="House" /></a><figcaption>Sold!</figcaption></figure>"#
        );
    }

    #[test]
    fn test_video_element_file_and_youtube() {
        let file = get_video();
        assert_eq!(
            file.render(),
            r#"<figure id="promo" class="c" style="s"><video width="640" height="360" controls><source src="/media/promo.mp4" type="video/mp4"></video><figcaption>Our story</figcaption></figure>"#
        );

        let youtube = VideoElement::new(
            attrs("yt"),
            "https://www.youtube.com/embed/abc",
            YOUTUBE_VIDEO_TYPE,
            "560",
            "315",
            "",
        );
        let html = youtube.render();
        assert!(html.contains(
            r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/abc" frameborder="0" allowfullscreen></iframe>"#
        ));
        assert!(!html.contains("<video"));
        assert!(!html.contains("<figcaption>"));
    }

    #[test]
    fn test_spacer_element_prepends_height() {
        let spacer = SpacerElement::new(attrs("gap"), "40px");

        assert_eq!(
            spacer.render(),
            r#"<div id="gap" class="c" style="height:40px;s"></div>"#
        );
    }

    #[test]
    fn test_gallery_grid_layout() {
        let gallery = GalleryElement::new(
            attrs("g"),
            vec![get_image("a"), get_image("b")],
            GalleryLayout::Grid,
            3,
        );
        let html = gallery.render();

        assert!(html.starts_with(r#"<div id="g" class="c" style="s">"#));
        assert!(html.contains("grid-template-columns: repeat(3, 1fr);"));
        assert_eq!(html.matches(r#"<div class="grid-item">"#).count(), 2);
        assert!(html.contains(&get_image("a").render()));
        assert!(html.contains(&get_image("b").render()));
    }

    #[test]
    fn test_gallery_grid_has_at_least_one_column() {
        let gallery =
            GalleryElement::new(attrs("g"), vec![], GalleryLayout::Grid, 0);

        assert!(gallery.render().contains("repeat(1, 1fr)"));
    }

    #[test]
    fn test_gallery_carousel_and_unknown_layouts() {
        let carousel = GalleryElement::new(
            attrs("g"),
            vec![get_image("a")],
            GalleryLayout::Carousel,
            0,
        );
        let html = carousel.render();
        assert!(html.contains(r#"<div class="carousel"><div class="carousel-item">"#));

        let unknown = GalleryElement::new(
            attrs("g"),
            vec![get_image("a")],
            GalleryLayout::Unknown,
            2,
        );
        assert_eq!(
            unknown.render(),
            r#"<div id="g" class="c" style="s"><div>Invalid gallery layout.</div></div>"#
        );
    }

    #[test]
    fn test_background_styles() {
        let color = BackgroundElement::new(attrs("bg"), BackgroundKind::Color, "x")
            .color("#000");
        assert_eq!(
            color.render(),
            r#"<div id="bg" class="c" style="background-color:#000;s">x</div>"#
        );

        let gradient =
            BackgroundElement::new(attrs("bg"), BackgroundKind::Gradient, "x")
                .gradient("linear-gradient(red, blue)");
        assert!(gradient
            .render()
            .contains(r#"style="background-image:linear-gradient(red, blue);s""#));

        let image = BackgroundElement::new(attrs("bg"), BackgroundKind::Image, "x")
            .image("/img/bg.jpg");
        assert!(image.render().contains(
            "background-image: url('/img/bg.jpg'); background-size: cover;s"
        ));

        let plain = BackgroundElement::new(attrs("bg"), BackgroundKind::Plain, "x");
        assert_eq!(
            plain.render(),
            r#"<div id="bg" class="c" style="s">x</div>"#
        );
    }

    #[test]
    fn test_background_video_renders_video_only() {
        let background =
            BackgroundElement::new(attrs("bg"), BackgroundKind::Video, "ignored")
                .video(get_video());

        assert_eq!(background.render(), get_video().render());
    }

    #[test]
    fn test_social_links_sorted_by_platform() {
        let mut links = BTreeMap::new();
        links.insert("twitter".to_string(), "https://x.com/acme".to_string());
        links.insert(
            "facebook".to_string(),
            "https://facebook.com/acme".to_string(),
        );

        let social = SocialLinksElement::new(attrs("s"), links, "24px");
        let html = social.render();

        let facebook = html.find("facebook.com").unwrap();
        let twitter = html.find("x.com").unwrap();
        assert!(facebook < twitter);
        assert!(html.contains(
            r#"<a href="https://x.com/acme" target="_blank"><img src="/icons/twitter.png" alt="twitter" style="width: 24px; height: 24px;"></a>"#
        ));
    }

    #[test]
    fn test_form_element_fields() {
        let form = FormElement::new(
            attrs("f"),
            vec![
                FormField::new("Email", "email", "email", "you@example.com", true),
                FormField::new("Message", "textarea", "message", "Say hi", false),
            ],
            "/contact",
            "POST",
            "Send",
        );
        let html = form.render();

        assert!(html.starts_with(
            r#"<form id="f" class="c" style="s" action="/contact" method="POST">"#
        ));
        assert!(html.contains(
            r#"<label for="email">Email:</label><input type="email" id="email" name="email" placeholder="you@example.com" required><br>"#
        ));
        assert!(html.contains(
            r#"<label for="message">Message:</label><textarea id="message" name="message" placeholder="Say hi" ></textarea><br>"#
        ));
        assert!(html.ends_with(r#"<button type="submit">Send</button></form>"#));
    }

    #[test]
    fn test_map_element_single_style_attribute() {
        let map = MapElement::new(
            attrs("m"),
            "https://maps.example.com/embed",
            "600",
            "450",
        );
        let html = map.render();

        assert_eq!(html.matches("style=").count(), 1);
        assert!(html.contains(r#"style="border:0;s""#));
        assert!(html.contains(r#"src="https://maps.example.com/embed" width="600" height="450""#));
    }

    #[test]
    fn test_accordion_items_and_script() {
        let accordion = AccordionElement::new(
            attrs("faq"),
            vec![
                AccordionItem::new("Hours?", "9 to 5"),
                AccordionItem::new("Parking?", "Street only"),
            ],
        );
        let html = accordion.render();

        assert!(html.contains(
            r#"<button class="accordion-button" onclick="toggleAccordion('faq-item-1')">Parking?</button><div class="accordion-panel" id="faq-item-1">Street only</div>"#
        ));
        assert!(html.contains("function toggleAccordion(id)"));
    }

    #[test]
    fn test_tabs_headers_and_panels() {
        let tabs = TabsElement::new(
            attrs("t"),
            vec![TabItem::new("Buy", "Listings"), TabItem::new("Sell", "Valuation")],
        );
        let html = tabs.render();

        assert!(html.contains(
            r#"<button class="tab-button" onclick="openTab(event, 't', 't-tab-0')">Buy</button>"#
        ));
        assert!(html.contains(r#"<div id="t-tab-1" class="tab-content">Valuation</div>"#));
        assert!(html.contains("function openTab(evt, tabsID, tabID)"));
    }

    #[test]
    fn test_counter_targets_its_span() {
        let counter = CounterElement::new(attrs("sold"), 0, 250, 3)
            .prefix("+")
            .suffix(" homes");
        let html = counter.render();

        assert!(html.contains(r#"<span id="sold-counter">0</span>"#));
        assert!(html.contains("animateCounter('sold-counter', 0, 250, 3, '+', ' homes');"));
    }

    #[test]
    fn test_progress_bar_render() {
        let bar = ProgressBarElement::new(attrs("p"), 75, "8px", "#3498db");

        assert_eq!(
            bar.render(),
            r#"<div id="p" class="c" style="s"><div style="width: 75%; height: 8px; background-color: #3498db;"></div></div>"#
        );
    }

    #[test]
    fn test_testimonial_author_variants() {
        let full = TestimonialElement::new(
            attrs("r"),
            "Great service",
            "Sam",
            "/img/sam.jpg",
            "Acme",
        );
        assert_eq!(
            full.render(),
            r#"<blockquote id="r" class="c" style="s">Great service<br><img src="/img/sam.jpg" alt="Sam" style="width: 50px; height: 50px; border-radius: 50%;"><cite>Sam, Acme</cite></blockquote>"#
        );

        let no_company =
            TestimonialElement::new(attrs("r"), "Great service", "Sam", "", "");
        assert!(no_company.render().ends_with("<br><cite>Sam</cite></blockquote>"));

        let anonymous =
            TestimonialElement::new(attrs("r"), "Great service", "", "", "Acme");
        assert!(!anonymous.render().contains("<cite>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let elements: Vec<Element> = vec![
            DivBlock::new(attrs("d"), "x").into(),
            get_video().into(),
            CounterElement::new(attrs("c"), 1, 10, 2).into(),
        ];

        assert_eq!(render_all(&elements), render_all(&elements));
    }

    #[test]
    fn test_render_all_concatenates_in_order() {
        let first = ButtonBlock::new(attrs("a"), "A", "/a");
        let second = SpacerElement::new(attrs("b"), "10px");
        let elements: Vec<Element> = vec![first.clone().into(), second.clone().into()];

        assert_eq!(
            render_all(&elements),
            format!("{}{}", first.render(), second.render())
        );
    }

    #[test]
    fn test_element_decodes_from_tagged_json() {
        let element: Element = serde_json::from_value(serde_json::json!({
            "element": "gallery",
            "id": "g",
            "layout": "carousel",
            "images": [{ "src": "/a.jpg", "alt": "A" }]
        }))
        .unwrap();

        assert_eq!(element.kind(), "gallery");
        let Element::Gallery(gallery) = &element else {
            panic!("expected a gallery, got {:?}", element);
        };
        assert_eq!(gallery.attrs.id, "g");
        assert_eq!(gallery.layout, GalleryLayout::Carousel);
        assert_eq!(gallery.images[0].src, "/a.jpg");
    }

    #[test]
    fn test_element_unknown_enums_fall_back() {
        let gallery: Element = serde_json::from_value(serde_json::json!({
            "element": "gallery",
            "layout": "masonry"
        }))
        .unwrap();
        assert!(gallery.render().contains("Invalid gallery layout."));

        let background: Element = serde_json::from_value(serde_json::json!({
            "element": "background",
            "kind": "pattern",
            "content": "hello"
        }))
        .unwrap();
        assert_eq!(
            background.render(),
            r#"<div id="" class="" style="">hello</div>"#
        );
    }

    #[test]
    fn test_element_kinds_match_variants() {
        let samples: Vec<Element> = vec![
            DivBlock::default().into(),
            TextBlock::default().into(),
            ListBlock::default().into(),
            QuoteBlock::default().into(),
            ButtonBlock::default().into(),
            ImageElement::default().into(),
            VideoElement::default().into(),
            SpacerElement::default().into(),
            GalleryElement::default().into(),
            BackgroundElement::default().into(),
            SocialLinksElement::default().into(),
            FormElement::default().into(),
            MapElement::default().into(),
            AccordionElement::default().into(),
            TabsElement::default().into(),
            CounterElement::default().into(),
            ProgressBarElement::default().into(),
            TestimonialElement::default().into(),
        ];

        let kinds: Vec<&str> = samples.iter().map(Element::kind).collect();
        assert_eq!(kinds, Element::KINDS.to_vec());

        for sample in &samples {
            let encoded = serde_json::to_value(sample).unwrap();
            assert_eq!(encoded["element"], sample.kind());
        }
    }
}

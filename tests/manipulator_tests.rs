//! Library-level tests for the readme manipulator, driven by a readme in
//! the shape Azure API specifications use.

use tagmark::application::{Logger, ReadMeManipulator};
use tagmark::domain::headings::code_block_index;
use tagmark::domain::{
    MarkdownDocument, ReadMeBuilder, StringOrSeq, Suppression, SuppressionItem,
};

mod common;
use common::CDN_README;

struct SilentLogger;

impl Logger for SilentLogger {
    fn error(&self, _message: &str) {}
}

const SUPPRESSION_README: &str = "### Basic Information

```yaml
title: SubscriptionsAdminClient
openapi-type: arm
tag: package-2015-11-01
```

## Suppression

```yaml
directive:
- suppress: XmsResourceInPutResponse
  reason: Subscription is not modelled as an ARM resource for legacy reasons.
  where:
  - $.paths[\"/subscriptions/{subscriptionId}\"].put
- suppress: BodyTopLevelProperties
  reason: Legacy resource shape.
  where:
  - $.definitions.Subscription.properties
```

### Tag: package-2015-11-01

```yaml $(tag) == 'package-2015-11-01'
input-file:
- Microsoft.Subscriptions.Admin/preview/2015-11-01/Subscriptions.json
```
";

fn manipulator<'a>(logger: &'a SilentLogger, builder: &'a ReadMeBuilder) -> ReadMeManipulator<'a> {
    ReadMeManipulator::new(logger, builder)
}

#[test]
fn test_round_trip_reproduces_the_original_text() {
    let doc = MarkdownDocument::parse(CDN_README);
    assert_eq!(doc.render(), CDN_README);
}

#[test]
fn test_get_all_tags_in_document_order() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let doc = MarkdownDocument::parse(CDN_README);
    assert_eq!(
        rm.get_all_tags(&doc),
        vec!["package-2017-10", "package-2017-04"]
    );
}

#[test]
fn test_tags_for_one_changed_file() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let doc = MarkdownDocument::parse(CDN_README);
    let affected = rm.get_tags_for_files_changed(
        &doc,
        &["specifications/test/Microsoft.Cdn/stable/2017-10-12/cdn.json".to_string()],
    );
    assert_eq!(affected, vec!["package-2017-10"]);
}

#[test]
fn test_tags_for_several_changed_files() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let doc = MarkdownDocument::parse(CDN_README);
    let affected = rm.get_tags_for_files_changed(
        &doc,
        &[
            "specifications/test/Microsoft.Cdn/stable/2017-10-12/cdn.json".to_string(),
            "specifications/test/Microsoft.Cdn/stable/2017-04-02/cdn.json".to_string(),
        ],
    );
    assert_eq!(affected, vec!["package-2017-10", "package-2017-04"]);
}

#[test]
fn test_heading_index_has_all_section_labels() {
    let doc = MarkdownDocument::parse(CDN_README);
    let index = code_block_index(&doc);
    let mut labels: Vec<&String> = index.keys().collect();
    labels.sort();
    assert_eq!(
        labels,
        vec![
            "Basic Information",
            "Tag: package-2017-04",
            "Tag: package-2017-10"
        ]
    );
}

#[test]
fn test_update_latest_tag() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let mut doc = MarkdownDocument::parse(CDN_README);
    let updated = rm.update_latest_tag(&mut doc, "package-2018-10").unwrap();
    assert!(updated.contains("tag: package-2018-10"));
    assert!(!updated.contains("tag: package-2017-10\n"));
}

#[test]
fn test_update_latest_tag_twice_is_idempotent() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let mut doc = MarkdownDocument::parse(CDN_README);
    let once = rm.update_latest_tag(&mut doc, "package-2018-10").unwrap();

    let mut reparsed = MarkdownDocument::parse(&once);
    let twice = rm
        .update_latest_tag(&mut reparsed, "package-2018-10")
        .unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_inserted_tag_shows_up_in_get_all_tags() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let updated = rm.insert_tag_definition(
        CDN_README,
        &["Microsoft.Cdn/stable/2018-06-15/cdn.json".to_string()],
        "package-2018-06",
    );
    let doc = MarkdownDocument::parse(&updated);
    assert_eq!(
        rm.get_all_tags(&doc),
        vec!["package-2018-06", "package-2017-10", "package-2017-04"]
    );
}

#[test]
fn test_suppression_block_appears_after_append_and_reparse() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let doc = MarkdownDocument::parse(CDN_README);
    assert!(!rm.has_suppression_block(&doc));

    let appended = rm.add_suppression_block(CDN_README);
    let doc = MarkdownDocument::parse(&appended);
    assert!(rm.has_suppression_block(&doc));
}

#[test]
fn test_add_suppression_appends_one_item_preserving_order() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let item = SuppressionItem {
        suppress: "SubscriptionIdParameterInOperations".to_string(),
        reason: Some("Subscription is the main resource in the API.".to_string()),
        r#where: StringOrSeq::One(
            "$.paths[\"/subscriptions/{subscriptionId}\"].get.parameters[0]".to_string(),
        ),
        from: Some(StringOrSeq::One("Subscriptions.json".to_string())),
        text_matches: None,
    };

    let mut doc = MarkdownDocument::parse(SUPPRESSION_README);
    rm.add_suppression(&mut doc, &item).unwrap();

    let rendered = doc.render();
    assert!(rendered.contains("SubscriptionIdParameterInOperations"));
    assert!(rendered.contains("Subscription is the main resource in the API."));

    let reparsed = MarkdownDocument::parse(&rendered);
    let index = code_block_index(&reparsed);
    let suppression: Suppression =
        serde_yaml::from_str(reparsed.literal(index["Suppression"]).unwrap()).unwrap();
    assert_eq!(suppression.directive.len(), 3);
    assert_eq!(
        suppression.directive[0].suppress,
        "XmsResourceInPutResponse"
    );
    assert_eq!(suppression.directive[1].suppress, "BodyTopLevelProperties");
    assert_eq!(
        suppression.directive[2].suppress,
        "SubscriptionIdParameterInOperations"
    );
}

#[test]
fn test_add_suppression_leaves_other_sections_untouched() {
    let logger = SilentLogger;
    let builder = ReadMeBuilder;
    let rm = manipulator(&logger, &builder);

    let item = SuppressionItem {
        suppress: "Rule".to_string(),
        reason: None,
        r#where: StringOrSeq::One("$.x".to_string()),
        from: None,
        text_matches: None,
    };

    let mut doc = MarkdownDocument::parse(SUPPRESSION_README);
    rm.add_suppression(&mut doc, &item).unwrap();
    let rendered = doc.render();

    assert!(rendered.contains("title: SubscriptionsAdminClient"));
    assert!(rendered
        .contains("Microsoft.Subscriptions.Admin/preview/2015-11-01/Subscriptions.json"));
}

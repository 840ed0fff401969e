//! End-to-end construction through the public DSL surface.

use std::sync::Arc;

use fluent_notify::{
    DefaultBehaviour, Error, GroupAlert, Importance, IntentTarget, MemoryNotifier, NotifyContext,
    Style,
};
use fluent_notify_core::{ImageRef, MapResourceTable, ResourceId};

const CHANNEL_ID: ResourceId = ResourceId(1);
const CHANNEL_NAME: ResourceId = ResourceId(2);
const TITLE: ResourceId = ResourceId(3);
const SMALL_ICON: ResourceId = ResourceId(4);
const REQUEST_CODE: ResourceId = ResourceId(5);

fn resources() -> MapResourceTable {
    MapResourceTable::new()
        .with_text(CHANNEL_ID, "chat")
        .with_text(CHANNEL_NAME, "Chat messages")
        .with_text(TITLE, "New message")
        .with_image(SMALL_ICON, ImageRef(100))
        .with_integer(REQUEST_CODE, 9001)
}

fn context() -> (NotifyContext, Arc<MemoryNotifier>) {
    tracing_subscriber::fmt().with_test_writer().try_init().ok();
    let notifier = Arc::new(MemoryNotifier::new());
    (
        NotifyContext::new(Arc::new(resources()), notifier.clone()),
        notifier,
    )
}

#[test]
fn full_notification_from_resources() {
    let (ctx, notifier) = context();

    ctx.show_notification(10, Some("msg"), |core| {
        core.channel(|c| {
            c.id_res(CHANNEL_ID)
                .name_res(CHANNEL_NAME)
                .description("Incoming chat messages");
        })
        .behaviour(|b| {
            b.importance(Importance::High)
                .light_color(0xFF00FF00)
                .show_badge(true)
                .add_default(DefaultBehaviour::Sound);
        })
        .notification(|n| {
            n.title_res(TITLE)
                .content_text("Ada: hi!")
                .small_icon_res(SMALL_ICON)
                .on_content_action(true, |i| {
                    i.start_activity("app/Conversation")
                        .request_code_res(REQUEST_CODE)
                        .extra("conversation", "ada");
                })
                .add_action(|a| {
                    a.icon(ImageRef(101)).text("Reply").on_action(|i| {
                        i.broadcast("app/ReplyReceiver");
                    });
                });
        });
    })
    .unwrap();

    let channel = notifier.channel("chat").expect("channel created");
    assert_eq!(channel.name, "Chat messages");
    assert_eq!(channel.importance, Importance::High);
    assert!(channel.lights_enabled);
    assert!(channel.show_badge);

    let posted = notifier.posted(Some("msg"), 10).expect("posted");
    assert_eq!(posted.title, "New message");
    assert_eq!(posted.small_icon, ImageRef(100));
    assert_eq!(posted.priority, 1);
    assert!(posted.auto_cancel);

    let intent = posted.content_intent.expect("content intent");
    assert_eq!(intent.target, IntentTarget::Activity("app/Conversation".into()));
    assert_eq!(intent.request_code, 9001);

    assert_eq!(posted.actions.len(), 1);
    assert_eq!(posted.actions[0].text, "Reply");
}

#[test]
fn direct_values_override_resources() {
    let (ctx, notifier) = context();

    ctx.show_notification(11, None, |core| {
        core.channel(|c| {
            c.id_res(CHANNEL_ID).name_res(CHANNEL_NAME);
        })
        .notification(|n| {
            n.title_res(TITLE)
                .title("Overridden")
                .small_icon(ImageRef(5));
        });
    })
    .unwrap();

    let posted = notifier.posted(None, 11).unwrap();
    assert_eq!(posted.title, "Overridden");
    assert_eq!(posted.small_icon, ImageRef(5));
}

#[test]
fn grouped_notifications_share_a_key() {
    let (ctx, notifier) = context();

    ctx.show_notification(12, None, |core| {
        core.channel(|c| {
            c.id("chat").name("Chat");
        })
        .notification(|n| {
            n.title("Ada").small_icon(ImageRef(1));
        })
        .group_by(100, Some("conversations"), |g| {
            g.alert(GroupAlert::Summary).summary(|n| {
                n.title("2 conversations")
                    .small_icon(ImageRef(1))
                    .style_inbox(|s| {
                        s.line("Ada: hi!").line("Grace: lunch?").summary("2 new");
                    });
            });
        });
    })
    .unwrap();

    let child = notifier.posted(None, 12).unwrap();
    let summary = notifier.posted(Some("conversations"), 100).unwrap();

    let child_group = child.group.expect("child group info");
    let summary_group = summary.group.clone().expect("summary group info");
    assert_eq!(child_group.key, "conversations");
    assert_eq!(summary_group.key, "conversations");
    assert!(!child_group.summary);
    assert!(summary_group.summary);
    assert_eq!(summary_group.alert, GroupAlert::Summary);

    match summary.style {
        Some(Style::Inbox { lines, summary, .. }) => {
            assert_eq!(lines.len(), 2);
            assert_eq!(summary.as_deref(), Some("2 new"));
        }
        other => panic!("expected inbox style, got {other:?}"),
    }
}

#[test]
fn messaging_style_builds_conversation() {
    let (ctx, notifier) = context();

    ctx.show_notification(13, None, |core| {
        core.channel(|c| {
            c.id("chat").name("Chat");
        })
        .notification(|n| {
            n.title("Ada").small_icon(ImageRef(1)).style_messaging(|s| {
                s.person(|p| {
                    p.name("Me").key("me");
                })
                .message(|m| {
                    m.text("hi!").timestamp_ms(1_000);
                })
                .message(|m| {
                    m.text("hello!").timestamp_ms(2_000).sender(|p| {
                        p.name("Ada");
                    });
                });
            });
        });
    })
    .unwrap();

    let posted = notifier.posted(None, 13).unwrap();
    match posted.style {
        Some(Style::Messaging { person, messages }) => {
            assert_eq!(person.name, "Me");
            assert_eq!(messages[0].sender.name, "Me");
            assert_eq!(messages[1].sender.name, "Ada");
        }
        other => panic!("expected messaging style, got {other:?}"),
    }
}

#[test]
fn missing_required_field_aborts_the_whole_construction() {
    let (ctx, notifier) = context();

    let result = ctx.show_notification(14, None, |core| {
        core.channel(|c| {
            c.id("chat").name("Chat");
        })
        .notification(|n| {
            // Title comes from a resource id the table does not know.
            n.title_res(ResourceId(9999)).small_icon(ImageRef(1));
        });
    });

    assert_eq!(
        result.unwrap_err(),
        Error::RequiredNotSet {
            owner: "NotificationBuilder",
            name: "title"
        }
    );
    assert!(notifier.posted(None, 14).is_none());
}

#[test]
fn double_content_action_aborts_with_already_set() {
    let (ctx, _notifier) = context();

    let result = ctx.show_notification(15, None, |core| {
        core.channel(|c| {
            c.id("chat").name("Chat");
        })
        .notification(|n| {
            n.title("Hi")
                .small_icon(ImageRef(1))
                .on_content_action(true, |i| {
                    i.start_activity("app/A");
                })
                .on_content_action(true, |i| {
                    i.start_activity("app/B");
                });
        });
    });

    assert_eq!(
        result.unwrap_err(),
        Error::AlreadySet {
            owner: "NotificationBuilder",
            name: "content_intent"
        }
    );
}

//! Verb table and request parsing.

use rimo_core::{AccessResult, Value};
use rimo_model::Model;
use rimo_registry::ModelDef;

use crate::ops;
use crate::result::Outcome;

/// An accessor verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Is,
    Set,
    Add,
    Remove,
}

impl Verb {
    /// Request-name prefix selecting this verb.
    pub fn prefix(self) -> &'static str {
        match self {
            Verb::Get => "get",
            Verb::Is => "is",
            Verb::Set => "set",
            Verb::Add => "add",
            Verb::Remove => "remove",
        }
    }

    /// Number of arguments the verb takes.
    pub fn arity(self) -> usize {
        match self {
            Verb::Get | Verb::Is => 0,
            Verb::Set | Verb::Add | Verb::Remove => 1,
        }
    }

    /// Whether the verb writes to the instance.
    pub fn mutates(self) -> bool {
        self.arity() > 0
    }

    /// Whether the verb operates on a collection field.
    pub fn targets_collection(self) -> bool {
        matches!(self, Verb::Add | Verb::Remove)
    }
}

/// Signature shared by all verb operations. Receives the resolved field.
pub(crate) type Handler =
    fn(&mut dyn Model, &ModelDef, &str, Option<Value>) -> AccessResult<Outcome>;

pub(crate) struct VerbEntry {
    pub verb: Verb,
    pub handler: Handler,
}

/// Verbs in matching priority order.
pub(crate) const VERB_TABLE: [VerbEntry; 5] = [
    VerbEntry {
        verb: Verb::Get,
        handler: ops::execute_get,
    },
    VerbEntry {
        verb: Verb::Is,
        handler: ops::execute_is,
    },
    VerbEntry {
        verb: Verb::Set,
        handler: ops::execute_set,
    },
    VerbEntry {
        verb: Verb::Add,
        handler: ops::execute_add,
    },
    VerbEntry {
        verb: Verb::Remove,
        handler: ops::execute_remove,
    },
];

/// Table entries are laid out in `Verb` discriminant order.
pub(crate) fn handler_for(verb: Verb) -> Handler {
    VERB_TABLE[verb as usize].handler
}

/// A request name split into verb and logical field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request<'a> {
    pub verb: Verb,
    pub logical: &'a str,
}

impl<'a> Request<'a> {
    /// Match `name` against the verb table. The first verb whose prefix
    /// matches and whose arity equals `arg_count` wins.
    pub fn parse(name: &'a str, arg_count: usize) -> Option<Self> {
        VERB_TABLE.iter().find_map(|entry| {
            let logical = name.strip_prefix(entry.verb.prefix())?;
            (entry.verb.arity() == arg_count).then_some(Request {
                verb: entry.verb,
                logical,
            })
        })
    }
}

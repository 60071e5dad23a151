//! Operation descriptors for the admin event API
//!
//! Each remote operation is a fixed pairing of an HTTP verb and a path
//! template. The client builds every request path from these descriptors, and
//! the same table backs endpoint search for reference tooling.

use std::fmt;
use std::str::FromStr;

/// HTTP verbs used by the admin event API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported HTTP verb
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown HTTP method: {}", self.0)
    }
}

impl std::error::Error for UnknownMethod {}

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A documented input of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Placeholder name in the path template, or `body` for the request body
    pub name: &'static str,
    /// Wire type name as documented by the service
    pub type_name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// One remote operation: verb, path template and documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Operation identifier as published by the service
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path with `{placeholder}` segments, relative to the base URL
    pub path_template: &'static str,
    pub parameters: &'static [Parameter],
}

impl Operation {
    /// Substitute `{name}` placeholders with the matching values
    ///
    /// Values are inserted verbatim, without URL-encoding. Placeholders with
    /// no matching value are kept as written.
    pub fn path(&self, params: &[(&str, &str)]) -> String {
        let template = self.path_template;
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let key = &after[..close];
                    match params.iter().find(|(name, _)| *name == key) {
                        Some((_, value)) => out.push_str(value),
                        None => out.push_str(&rest[open..open + close + 2]),
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// True if `term` occurs in the name or description, ignoring case
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Verb restriction applied by [`search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodFilter {
    #[default]
    All,
    Only(HttpMethod),
}

impl MethodFilter {
    pub fn accepts(&self, method: HttpMethod) -> bool {
        match self {
            MethodFilter::All => true,
            MethodFilter::Only(m) => *m == method,
        }
    }
}

impl FromStr for MethodFilter {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(MethodFilter::All)
        } else {
            s.parse().map(MethodFilter::Only)
        }
    }
}

/// Number of operations per verb
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MethodCounts {
    pub get: usize,
    pub post: usize,
    pub put: usize,
    pub delete: usize,
}

impl MethodCounts {
    pub fn total(&self) -> usize {
        self.get + self.post + self.put + self.delete
    }
}

const fn param(name: &'static str, description: &'static str) -> Parameter {
    Parameter {
        name,
        type_name: "string",
        required: true,
        description,
    }
}

const fn body(type_name: &'static str) -> Parameter {
    Parameter {
        name: "body",
        type_name,
        required: true,
        description: "The request body.",
    }
}

const EVENT_ID: Parameter = param("id", "Event ID");
const HOST_ID: Parameter = param("host_id", "Host ID");

pub const GET_COLLATERAL_TEMPLATES: Operation = Operation {
    name: "adminEventControllerGetEventCollateralTemplate",
    description: "Fetches a list of all collateral templates associated with the given event ID.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/collateral_templates",
    parameters: &[EVENT_ID],
};

pub const LIST_EVENTS: Operation = Operation {
    name: "adminEventControllerList",
    description: "Fetches and returns a paginated list of all events matching the query filters.",
    method: HttpMethod::Get,
    path_template: "/v2/event",
    parameters: &[],
};

pub const CREATE_EVENT: Operation = Operation {
    name: "adminEventControllerCreate",
    description: "Creates a new event using the provided request payload and authenticated user details.",
    method: HttpMethod::Post,
    path_template: "/v2/event",
    parameters: &[body("CreateEventRequest")],
};

pub const GET_EVENT: Operation = Operation {
    name: "adminEventControllerGet",
    description: "Retrieves detailed information for a specific event based on its unique identifier.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}",
    parameters: &[EVENT_ID],
};

pub const UPDATE_EVENT: Operation = Operation {
    name: "adminEventControllerUpdate",
    description: "Updates an existing event's details using its unique ID and request payload.",
    method: HttpMethod::Put,
    path_template: "/v2/event/{id}",
    parameters: &[body("UpdateEventRequest"), EVENT_ID],
};

pub const CANCEL_EVENT: Operation = Operation {
    name: "adminEventControllerCancel",
    description: "Cancels a scheduled event using its unique identifier and cancellation request payload.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{id}/cancel",
    parameters: &[body("CancelEventRequest"), EVENT_ID],
};

pub const GET_CONFLICTING_EVENTS: Operation = Operation {
    name: "adminEventControllerGetConflictingEvents",
    description: "Checks if the given host is already assigned to other events that conflict with the specified event.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/host/{host_id}",
    parameters: &[EVENT_ID, HOST_ID],
};

pub const ADD_HOST: Operation = Operation {
    name: "adminEventControllerAddHost",
    description: "Assigns a host to the specified event by providing the host ID.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{id}/host/{host_id}",
    parameters: &[EVENT_ID, HOST_ID],
};

pub const UPDATE_HOST: Operation = Operation {
    name: "adminEventControllerUpdateHost",
    description: "Updates the assignment details of a host for a given event.",
    method: HttpMethod::Put,
    path_template: "/v2/event/{id}/host/{host_id}",
    parameters: &[body("UpdateEventHostRequest"), EVENT_ID, HOST_ID],
};

pub const REMOVE_HOST: Operation = Operation {
    name: "adminEventControllerRemoveHost",
    description: "Unassigns a host from the specified event using event ID and host ID.",
    method: HttpMethod::Delete,
    path_template: "/v2/event/{id}/host/{host_id}",
    parameters: &[EVENT_ID, HOST_ID],
};

pub const ADD_MULTIPLE_HOSTS: Operation = Operation {
    name: "adminEventControllerAddMultipleHost",
    description: "Assigns multiple hosts to an event using a batch request payload.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{id}/hosts",
    parameters: &[body("any"), EVENT_ID],
};

pub const GET_AVAILABLE_HOSTS: Operation = Operation {
    name: "adminEventControllerGetAvailableHosts",
    description: "Returns a list of hosts available for assignment to the specified event.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/available_hosts",
    parameters: &[EVENT_ID],
};

pub const GET_CALENDAR_ACTIONABLES: Operation = Operation {
    name: "adminEventControllerGetCalendarActionables",
    description: "Fetches actionable calendar items such as tasks, reminders, or milestones for the given event.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/calendar-actionable",
    parameters: &[EVENT_ID],
};

pub const VALIDATE_OLD_EVENT_ID: Operation = Operation {
    name: "adminEventControllerValidateOldEventId",
    description: "Checks whether a given old event ID is still valid and maps it if necessary.",
    method: HttpMethod::Get,
    path_template: "/v2/event/old-event/{id}",
    parameters: &[param("id", "Old Event ID")],
};

pub const GET_SHOWCASE_PAGE_DATA: Operation = Operation {
    name: "adminEventControllerGetShowcasePageData",
    description: "Fetches data for rendering a public showcase page of the given event.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/showcase",
    parameters: &[EVENT_ID],
};

pub const GET_APPROVAL_PAGE_DATA: Operation = Operation {
    name: "adminEventControllerGetApprovalPageData",
    description: "Returns approval-related details for the event, such as name, start time, and timezone.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/approval-page",
    parameters: &[EVENT_ID],
};

pub const CREATE_SHIPMENT_ADDRESS: Operation = Operation {
    name: "adminEventControllerCreateEventShipmentAddress",
    description: "Creates a new shipment address record for either event hosts or event partners, based on role.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{shipmentRole}/shipment-address",
    parameters: &[
        body("CreateEventShipmentAddressRequestPayload"),
        param("shipmentRole", "Shipment Role"),
    ],
};

pub const UPDATE_SHIPMENT_ADDRESS: Operation = Operation {
    name: "adminEventControllerUpdateEventshipmentAddress",
    description: "Updates shipment address details for hosts or partners linked to an event.",
    method: HttpMethod::Put,
    path_template: "/v2/event/{shipmentRole}/shipment-address/{id}",
    parameters: &[
        body("UpdateEventShipmentAddressRequestPayload"),
        param("id", "Address ID"),
        param("shipmentRole", "Shipment Role"),
    ],
};

pub const ADD_PARTNER_TESTIMONIAL: Operation = Operation {
    name: "adminEventControllerAddPartnerTestimonial",
    description: "Adds a partner testimonial to an event.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{id}/partner_testimonial",
    parameters: &[body("CreateEventPartnerTestimonialRequest"), EVENT_ID],
};

pub const UPDATE_PARTNER_TESTIMONIAL: Operation = Operation {
    name: "adminEventControllerUpdatePartnerTestimonial",
    description: "Updates a partner testimonial for an event.",
    method: HttpMethod::Put,
    path_template: "/v2/event/{id}/partner_testimonial/{partner_testimonial_id}",
    parameters: &[
        body("UpdateEventPartnerTestimonialRequest"),
        EVENT_ID,
        param("partner_testimonial_id", "Partner Testimonial ID"),
    ],
};

pub const GET_EVENT_CATALOGUE: Operation = Operation {
    name: "adminEventControllerGetEventCatalogue",
    description: "Retrieves the event catalogue information.",
    method: HttpMethod::Get,
    path_template: "/v2/event/{id}/catalogue",
    parameters: &[EVENT_ID],
};

pub const UPSERT_MEET_AND_GREET: Operation = Operation {
    name: "adminEventControllerUpsertMeetAndGreet",
    description: "Creates or updates a meet and greet session for an event.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{id}/host/{host_id}/champion/{champion_id}/meet-and-greet",
    parameters: &[
        body("UpsertEventMeetAndGreetDto"),
        EVENT_ID,
        HOST_ID,
        param("champion_id", "Champion ID"),
    ],
};

pub const ATTACH_CHECKLIST: Operation = Operation {
    name: "adminEventControllerAttachChecklist",
    description: "Attaches a checklist to an event.",
    method: HttpMethod::Post,
    path_template: "/v2/event/{eventId}/attach-checklist",
    parameters: &[param("eventId", "Event ID")],
};

/// Every operation exposed by the admin event API, in documentation order
pub const OPERATIONS: &[Operation] = &[
    GET_COLLATERAL_TEMPLATES,
    LIST_EVENTS,
    CREATE_EVENT,
    GET_EVENT,
    UPDATE_EVENT,
    CANCEL_EVENT,
    GET_CONFLICTING_EVENTS,
    ADD_HOST,
    UPDATE_HOST,
    REMOVE_HOST,
    ADD_MULTIPLE_HOSTS,
    GET_AVAILABLE_HOSTS,
    GET_CALENDAR_ACTIONABLES,
    VALIDATE_OLD_EVENT_ID,
    GET_SHOWCASE_PAGE_DATA,
    GET_APPROVAL_PAGE_DATA,
    CREATE_SHIPMENT_ADDRESS,
    UPDATE_SHIPMENT_ADDRESS,
    ADD_PARTNER_TESTIMONIAL,
    UPDATE_PARTNER_TESTIMONIAL,
    GET_EVENT_CATALOGUE,
    UPSERT_MEET_AND_GREET,
    ATTACH_CHECKLIST,
];

/// Look up an operation by its published name
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Operations matching `term` (name or description, case-insensitive) and `filter`
///
/// An empty term matches everything; catalogue order is preserved.
pub fn search(term: &str, filter: MethodFilter) -> Vec<&'static Operation> {
    OPERATIONS
        .iter()
        .filter(|op| filter.accepts(op.method) && op.matches(term))
        .collect()
}

pub fn method_counts() -> MethodCounts {
    OPERATIONS
        .iter()
        .fold(MethodCounts::default(), |mut counts, op| {
            match op.method {
                HttpMethod::Get => counts.get += 1,
                HttpMethod::Post => counts.post += 1,
                HttpMethod::Put => counts.put += 1,
                HttpMethod::Delete => counts.delete += 1,
            }
            counts
        })
}

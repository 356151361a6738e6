//! Input → output wiring for the dashboard's charts.
//!
//! Each output property is produced by one registered handler, a pure
//! function of the table and the current values of its declared inputs.
//! The registry keeps a subscription map from every input to the outputs
//! that read it, so a change to one control recomputes exactly the charts
//! that depend on it.

use crate::aggregate::PayloadRange;
use crate::figure::Figure;
use crate::handlers;
use crate::layout::{self, Layout};
use crate::table::LaunchTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A component property, written `id.property` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PropId {
    pub id: String,
    pub property: String,
}

impl PropId {
    pub fn new(id: &str, property: &str) -> Self {
        Self {
            id: id.to_string(),
            property: property.to_string(),
        }
    }

    pub fn parse(s: &str) -> Result<Self, CallbackError> {
        match s.rsplit_once('.') {
            Some((id, property)) if !id.is_empty() && !property.is_empty() => {
                Ok(Self::new(id, property))
            }
            _ => Err(CallbackError::InvalidPropId(s.to_string())),
        }
    }
}

impl fmt::Display for PropId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

impl From<PropId> for String {
    fn from(prop: PropId) -> Self {
        prop.to_string()
    }
}

impl TryFrom<String> for PropId {
    type Error = CallbackError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        PropId::parse(&s)
    }
}

/// Current value of one input, as sent by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    pub value: Value,
}

impl InputValue {
    pub fn new(prop: &PropId, value: Value) -> Self {
        Self {
            id: prop.id.clone(),
            property: prop.property.clone(),
            value,
        }
    }

    fn matches(&self, prop: &PropId) -> bool {
        self.id == prop.id && self.property == prop.property
    }
}

/// Errors in a round-trip request. The handlers themselves never fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CallbackError {
    #[error("no callback registered for output {0}")]
    UnknownOutput(String),
    #[error("missing value for input {0}")]
    MissingInput(String),
    #[error("invalid value for input {input}: {reason}")]
    InvalidValue { input: String, reason: String },
    #[error("malformed property id {0:?}, expected \"id.property\"")]
    InvalidPropId(String),
}

pub type Handler =
    Arc<dyn Fn(&LaunchTable, &[Value]) -> Result<Figure, CallbackError> + Send + Sync>;

struct Callback {
    output: PropId,
    inputs: Vec<PropId>,
    handler: Handler,
}

/// Output and the inputs it reads, as listed to the browser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dependency {
    pub output: PropId,
    pub inputs: Vec<PropId>,
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
    subscriptions: HashMap<PropId, Vec<usize>>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` as the producer of `output`. Inputs are passed to
    /// the handler in the order given here. Registering an output twice
    /// replaces the earlier handler.
    pub fn register<F>(&mut self, output: PropId, inputs: Vec<PropId>, handler: F)
    where
        F: Fn(&LaunchTable, &[Value]) -> Result<Figure, CallbackError> + Send + Sync + 'static,
    {
        if let Some(idx) = self.callbacks.iter().position(|c| c.output == output) {
            self.callbacks.remove(idx);
            self.reindex();
        }
        let idx = self.callbacks.len();
        for input in &inputs {
            self.subscriptions.entry(input.clone()).or_default().push(idx);
        }
        log::debug!("registered callback {} <- {:?}", output, inputs);
        self.callbacks.push(Callback {
            output,
            inputs,
            handler: Arc::new(handler),
        });
    }

    fn reindex(&mut self) {
        self.subscriptions.clear();
        for (idx, callback) in self.callbacks.iter().enumerate() {
            for input in &callback.inputs {
                self.subscriptions.entry(input.clone()).or_default().push(idx);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Outputs that must be recomputed when `input` changes.
    pub fn dependents(&self, input: &PropId) -> Vec<&PropId> {
        self.subscriptions
            .get(input)
            .map(|idxs| idxs.iter().map(|&i| &self.callbacks[i].output).collect())
            .unwrap_or_default()
    }

    pub fn dependencies(&self) -> Vec<Dependency> {
        self.callbacks
            .iter()
            .map(|c| Dependency {
                output: c.output.clone(),
                inputs: c.inputs.clone(),
            })
            .collect()
    }

    pub fn inputs_of(&self, output: &PropId) -> Option<&[PropId]> {
        self.find(output).map(|c| c.inputs.as_slice())
    }

    fn find(&self, output: &PropId) -> Option<&Callback> {
        self.callbacks.iter().find(|c| &c.output == output)
    }

    /// Run the handler for `output` with the supplied input values.
    ///
    /// Values are matched to the declared inputs by id and property; extra
    /// values are ignored.
    pub fn invoke(
        &self,
        table: &LaunchTable,
        output: &PropId,
        values: &[InputValue],
    ) -> Result<Figure, CallbackError> {
        let callback = self
            .find(output)
            .ok_or_else(|| CallbackError::UnknownOutput(output.to_string()))?;

        let args = callback
            .inputs
            .iter()
            .map(|input| {
                values
                    .iter()
                    .find(|v| v.matches(input))
                    .map(|v| v.value.clone())
                    .ok_or_else(|| CallbackError::MissingInput(input.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        (callback.handler)(table, &args)
    }
}

/// Current value of every control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    values: HashMap<PropId, Value>,
}

impl ControlState {
    /// State as reported by the browser; a later value for the same prop wins.
    pub fn from_inputs(inputs: &[InputValue]) -> Self {
        let mut state = Self::default();
        for input in inputs {
            state.set(PropId::new(&input.id, &input.property), input.value.clone());
        }
        state
    }

    pub fn get(&self, prop: &PropId) -> Option<&Value> {
        self.values.get(prop)
    }

    pub fn set(&mut self, prop: PropId, value: Value) {
        self.values.insert(prop, value);
    }

    /// Snapshot of `props` in wire form; props without a value are skipped.
    pub fn input_values(&self, props: &[PropId]) -> Vec<InputValue> {
        props
            .iter()
            .filter_map(|p| self.values.get(p).map(|v| InputValue::new(p, v.clone())))
            .collect()
    }
}

/// The loaded table, the static layout and the wired-up chart callbacks.
pub struct Dashboard {
    table: Arc<LaunchTable>,
    layout: Layout,
    registry: CallbackRegistry,
}

pub fn site_value() -> PropId {
    PropId::new(layout::SITE_DROPDOWN_ID, "value")
}

pub fn payload_value() -> PropId {
    PropId::new(layout::PAYLOAD_SLIDER_ID, "value")
}

pub fn pie_figure() -> PropId {
    PropId::new(layout::PIE_CHART_ID, "figure")
}

pub fn scatter_figure() -> PropId {
    PropId::new(layout::SCATTER_CHART_ID, "figure")
}

impl Dashboard {
    pub fn new(table: Arc<LaunchTable>) -> Self {
        let layout = Layout::build(&table);
        let mut registry = CallbackRegistry::new();

        registry.register(pie_figure(), vec![site_value()], |table, args| {
            let site = site_arg(&site_value(), &args[0])?;
            Ok(handlers::pie_chart(table, site).into())
        });

        registry.register(
            scatter_figure(),
            vec![site_value(), payload_value()],
            |table, args| {
                let site = site_arg(&site_value(), &args[0])?;
                let range = range_arg(&payload_value(), &args[1])?;
                Ok(handlers::scatter_chart(table, site, range).into())
            },
        );

        Self {
            table,
            layout,
            registry,
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    /// Control values as laid out on page load.
    pub fn initial_state(&self) -> ControlState {
        let mut state = ControlState::default();
        state.set(site_value(), Value::from(self.layout.site_dropdown.value.clone()));
        let [low, high] = self.layout.payload_slider.value;
        state.set(payload_value(), Value::from(vec![low, high]));
        state
    }

    pub fn invoke(&self, output: &PropId, values: &[InputValue]) -> Result<Figure, CallbackError> {
        self.registry.invoke(&self.table, output, values)
    }

    /// Compute every output from `state`, in registration order.
    pub fn render_all(&self, state: &ControlState) -> Result<Vec<(PropId, Figure)>, CallbackError> {
        self.registry
            .dependencies()
            .into_iter()
            .map(|dep| {
                let figure = self.invoke(&dep.output, &state.input_values(&dep.inputs))?;
                Ok((dep.output, figure))
            })
            .collect()
    }

    /// Record a control change and recompute the outputs subscribed to it.
    /// Outputs that do not read `prop` are left alone.
    pub fn apply_change(
        &self,
        state: &mut ControlState,
        prop: PropId,
        value: Value,
    ) -> Result<Vec<(PropId, Figure)>, CallbackError> {
        state.set(prop.clone(), value);
        self.registry
            .dependents(&prop)
            .into_iter()
            .map(|output| {
                let inputs = self.registry.inputs_of(output).unwrap_or_default();
                let figure = self.invoke(output, &state.input_values(inputs))?;
                Ok((output.clone(), figure))
            })
            .collect()
    }
}

/// A cleared dropdown arrives as `null` and matches no site.
fn site_arg<'a>(prop: &PropId, value: &'a Value) -> Result<&'a str, CallbackError> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        Value::Null => Ok(""),
        other => Err(CallbackError::InvalidValue {
            input: prop.to_string(),
            reason: format!("expected a site name, got {other}"),
        }),
    }
}

fn range_arg(prop: &PropId, value: &Value) -> Result<PayloadRange, CallbackError> {
    serde_json::from_value::<PayloadRange>(value.clone()).map_err(|e| {
        CallbackError::InvalidValue {
            input: prop.to_string(),
            reason: format!("expected [low, high], {e}"),
        }
    })
}

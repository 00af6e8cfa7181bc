//! Form state and validation for the create/edit dialogs.
//!
//! Form fields hold raw input strings; each form turns itself into a request
//! body only when it is valid, so an invalid submit never reaches the API.

use api::{
    CreateFieldAliasRequest, CreateSkuRequest, CreateTransactionRequest, Direction, FieldAlias,
    ManagedUser, Sku, UpdateFieldAliasRequest, UpdateSkuRequest, UpdateUserRequest,
    CreateUserRequest, DEFAULT_ROLE, ROLE_NAMES,
};

/// Trimmed value, or `None` when blank.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkuForm {
    pub sku_code: String,
    pub product_name: String,
    pub description: String,
    pub category: String,
    pub supplier: String,
    pub barcode: String,
}

impl SkuForm {
    pub fn from_sku(sku: &Sku) -> Self {
        Self {
            sku_code: sku.sku_code.clone(),
            product_name: sku.product_name.clone(),
            description: sku.description.clone().unwrap_or_default(),
            category: sku.category.clone().unwrap_or_default(),
            supplier: sku.supplier.clone().unwrap_or_default(),
            barcode: sku.barcode.clone().unwrap_or_default(),
        }
    }

    /// `None` while the code or product name is blank.
    pub fn to_create(&self) -> Option<CreateSkuRequest> {
        Some(CreateSkuRequest {
            sku_code: optional(&self.sku_code)?,
            product_name: optional(&self.product_name)?,
            description: optional(&self.description),
            category: optional(&self.category),
            supplier: optional(&self.supplier),
            barcode: optional(&self.barcode),
        })
    }

    /// `None` while the product name is blank. The code is not editable.
    pub fn to_update(&self) -> Option<UpdateSkuRequest> {
        Some(UpdateSkuRequest {
            product_name: optional(&self.product_name)?,
            description: optional(&self.description),
            category: optional(&self.category),
            supplier: optional(&self.supplier),
            barcode: optional(&self.barcode),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    pub sku_id: String,
    pub direction: String,
    pub quantity: String,
    pub unit_cost: String,
    pub reference_number: String,
    pub notes: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            sku_id: String::new(),
            direction: Direction::In.as_str().to_string(),
            quantity: "1".to_string(),
            unit_cost: "0".to_string(),
            reference_number: String::new(),
            notes: String::new(),
        }
    }
}

impl TransactionForm {
    pub fn to_request(&self) -> Result<CreateTransactionRequest, String> {
        let sku_id = optional(&self.sku_id).ok_or("Select a SKU")?;
        let transaction_type: Direction = self.direction.parse()?;
        let quantity = self
            .quantity
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or("Quantity must be at least 1")?;
        let unit_cost = parse_cost(&self.unit_cost)?;
        Ok(CreateTransactionRequest {
            sku_id,
            transaction_type,
            quantity,
            unit_cost,
            reference_number: optional(&self.reference_number),
            notes: optional(&self.notes),
        })
    }

    /// Quantity times unit cost, for the live total under the form.
    pub fn estimated_total(&self) -> Option<f64> {
        let quantity = self.quantity.trim().parse::<f64>().ok()?;
        let cost = self.unit_cost.trim().parse::<f64>().ok()?;
        Some(quantity * cost)
    }
}

/// Parses a non-negative money amount.
pub fn parse_cost(input: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|c| c.is_finite() && *c >= 0.0)
        .ok_or_else(|| "Cost must be a non-negative number".to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            name: String::new(),
            role: DEFAULT_ROLE.to_string(),
            is_active: true,
        }
    }
}

impl UserForm {
    pub fn from_user(user: &ManagedUser) -> Self {
        Self {
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }

    fn checked_role(&self) -> Result<String, String> {
        let role = self.role.trim();
        if ROLE_NAMES.contains(&role) {
            Ok(role.to_string())
        } else {
            Err(format!("Unknown role: {role}"))
        }
    }

    pub fn to_create(&self) -> Result<CreateUserRequest, String> {
        let email = optional(&self.email)
            .filter(|e| e.contains('@'))
            .ok_or("Enter a valid email address")?;
        let name = optional(&self.name).ok_or("Name is required")?;
        Ok(CreateUserRequest {
            email,
            name,
            role: self.checked_role()?,
        })
    }

    pub fn to_update(&self) -> Result<UpdateUserRequest, String> {
        let name = optional(&self.name).ok_or("Name is required")?;
        Ok(UpdateUserRequest {
            name,
            role: self.checked_role()?,
            is_active: Some(self.is_active),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldAliasForm {
    pub field_name: String,
    pub display_name: String,
    pub description: String,
    pub is_hidden: bool,
    pub sort_order: String,
}

impl Default for FieldAliasForm {
    fn default() -> Self {
        Self {
            field_name: String::new(),
            display_name: String::new(),
            description: String::new(),
            is_hidden: false,
            sort_order: "0".to_string(),
        }
    }
}

impl FieldAliasForm {
    pub fn from_alias(alias: &FieldAlias) -> Self {
        Self {
            field_name: alias.field_name.clone(),
            display_name: alias.display_name.clone(),
            description: alias.description.clone().unwrap_or_default(),
            is_hidden: alias.is_hidden,
            sort_order: alias.sort_order.to_string(),
        }
    }

    fn sort_order(&self) -> Result<i32, String> {
        let raw = self.sort_order.trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse::<i32>()
            .map_err(|_| "Sort order must be a whole number".to_string())
    }

    pub fn to_create(&self, table: &str) -> Result<CreateFieldAliasRequest, String> {
        let field_name = optional(&self.field_name).ok_or("Field name is required")?;
        let display_name = optional(&self.display_name).ok_or("Display name is required")?;
        Ok(CreateFieldAliasRequest {
            table_name: table.to_string(),
            field_name,
            display_name,
            description: optional(&self.description),
            is_hidden: self.is_hidden,
            sort_order: self.sort_order()?,
        })
    }

    pub fn to_update(&self) -> Result<UpdateFieldAliasRequest, String> {
        let display_name = optional(&self.display_name).ok_or("Display name is required")?;
        Ok(UpdateFieldAliasRequest {
            display_name,
            description: self.description.trim().to_string(),
            is_hidden: self.is_hidden,
            sort_order: self.sort_order()?,
        })
    }
}

/// Single-row inline editor: at most one key is being edited at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineEdit<K, V> {
    editing: Option<(K, V)>,
}

impl<K, V> Default for InlineEdit<K, V> {
    fn default() -> Self {
        Self { editing: None }
    }
}

impl<K: PartialEq, V> InlineEdit<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts editing `key`, abandoning any other row being edited.
    pub fn begin(&mut self, key: K, value: V) {
        self.editing = Some((key, value));
    }

    /// Replaces the draft value. Ignored when nothing is being edited.
    pub fn set(&mut self, value: V) {
        if let Some((_, draft)) = self.editing.as_mut() {
            *draft = value;
        }
    }

    pub fn cancel(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, key: &K) -> bool {
        matches!(&self.editing, Some((k, _)) if k == key)
    }

    pub fn is_open(&self) -> bool {
        self.editing.is_some()
    }

    pub fn key(&self) -> Option<&K> {
        self.editing.as_ref().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&V> {
        self.editing.as_ref().map(|(_, v)| v)
    }

    /// Closes the editor and hands back what was being edited.
    pub fn take(&mut self) -> Option<(K, V)> {
        self.editing.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sku_form_requires_code_and_name() {
        let mut form = SkuForm::default();
        assert!(form.to_create().is_none());

        form.sku_code = "ELEC-001".into();
        form.product_name = "   ".into();
        assert!(form.to_create().is_none());

        form.product_name = " Cable ".into();
        form.category = "  ".into();
        form.supplier = "Acme".into();
        let req = form.to_create().unwrap();
        assert_eq!(req.product_name, "Cable");
        assert_eq!(req.category, None);
        assert_eq!(req.supplier.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_sku_update_needs_name() {
        let mut form = SkuForm {
            sku_code: "X".into(),
            ..Default::default()
        };
        assert!(form.to_update().is_none());
        form.product_name = "Desk".into();
        assert_eq!(form.to_update().unwrap().product_name, "Desk");
    }

    #[test]
    fn test_transaction_form_validation() {
        let mut form = TransactionForm::default();
        assert_eq!(form.to_request().unwrap_err(), "Select a SKU");

        form.sku_id = "4".into();
        form.quantity = "0".into();
        assert_eq!(form.to_request().unwrap_err(), "Quantity must be at least 1");

        form.quantity = "3".into();
        form.unit_cost = "-1".into();
        assert!(form.to_request().is_err());

        form.unit_cost = "2.50".into();
        form.direction = "sideways".into();
        assert!(form.to_request().is_err());

        form.direction = "out".into();
        let req = form.to_request().unwrap();
        assert_eq!(req.transaction_type, Direction::Out);
        assert_eq!(req.quantity, 3);
        assert_eq!(req.unit_cost, 2.5);
        assert_eq!(form.estimated_total(), Some(7.5));
    }

    #[test]
    fn test_user_form() {
        let mut form = UserForm::default();
        form.email = "not-an-email".into();
        form.name = "Ana".into();
        assert!(form.to_create().is_err());

        form.email = "ana@example.com".into();
        assert_eq!(form.to_create().unwrap().role, "user");

        form.role = "owner".into();
        assert_eq!(form.to_create().unwrap_err(), "Unknown role: owner");

        form.role = "viewer".into();
        form.is_active = false;
        let update = form.to_update().unwrap();
        assert_eq!(update.is_active, Some(false));
    }

    #[test]
    fn test_field_alias_form() {
        let mut form = FieldAliasForm::default();
        form.field_name = "sku_code".into();
        assert!(form.to_create("skus").is_err());

        form.display_name = "Item Code".into();
        form.sort_order = "x".into();
        assert!(form.to_create("skus").is_err());

        form.sort_order = "".into();
        let req = form.to_create("skus").unwrap();
        assert_eq!(req.table_name, "skus");
        assert_eq!(req.sort_order, 0);
        assert_eq!(req.description, None);

        form.is_hidden = true;
        form.sort_order = "3".into();
        let update = form.to_update().unwrap();
        assert!(update.is_hidden);
        assert_eq!(update.sort_order, 3);
    }

    #[test]
    fn test_inline_edit() {
        let mut edit: InlineEdit<String, String> = InlineEdit::new();
        edit.set("ignored".into());
        assert!(!edit.is_open());

        edit.begin("sku-1".into(), "12.00".into());
        assert!(edit.is_editing(&"sku-1".to_string()));
        assert!(!edit.is_editing(&"sku-2".to_string()));

        edit.begin("sku-2".into(), "3.00".into());
        assert!(!edit.is_editing(&"sku-1".to_string()));

        edit.set("4.25".into());
        assert_eq!(edit.value().map(String::as_str), Some("4.25"));

        let (key, value) = edit.take().unwrap();
        assert_eq!((key.as_str(), value.as_str()), ("sku-2", "4.25"));
        assert!(!edit.is_open());

        edit.begin("sku-3".into(), "1".into());
        edit.cancel();
        assert!(edit.key().is_none());
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost(" 12.5 "), Ok(12.5));
        assert_eq!(parse_cost("0"), Ok(0.0));
        assert!(parse_cost("-0.01").is_err());
        assert!(parse_cost("abc").is_err());
        assert!(parse_cost("inf").is_err());
    }
}

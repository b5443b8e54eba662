//! Fixed demo rows inserted by the seeding routine

use uuid::Uuid;

pub struct PlaceholderUser {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
}

pub struct PlaceholderCustomer {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: &'static str,
}

pub struct PlaceholderInvoice {
    pub customer_id: &'static str,
    /// Minor units
    pub amount: i64,
    pub status: &'static str,
    pub date: &'static str,
}

pub struct PlaceholderRevenue {
    pub month: &'static str,
    pub revenue: i64,
}

/// Stored in place of a real password hash; demo accounts cannot log in.
pub const PLACEHOLDER_PASSWORD_HASH: &str = "!placeholder";

pub const USERS: &[PlaceholderUser] = &[PlaceholderUser {
    id: "410544b2-4001-4271-9855-fec4b6a6442a",
    name: "User",
    email: "user@nextmail.com",
}];

const EVIL_RABBIT: &str = "d6e15727-9fe1-4961-8c5b-ea44a9bd81aa";
const DELBA_DE_OLIVEIRA: &str = "3958dc9e-712f-4377-85e9-fec4b6a6442a";
const LEE_ROBINSON: &str = "3958dc9e-742f-4377-85e9-fec4b6a6442a";
const MICHAEL_NOVOTNY: &str = "76d65c26-f784-44a2-ac19-586678f7c2f2";
const AMY_BURNS: &str = "cc27c14a-0acf-4f4a-a6c9-d45682c144b9";
const BALAZS_ORBAN: &str = "13d07535-c59e-4157-a011-f8d2ef4e0cbb";

pub const CUSTOMERS: &[PlaceholderCustomer] = &[
    PlaceholderCustomer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    PlaceholderCustomer {
        id: DELBA_DE_OLIVEIRA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    PlaceholderCustomer {
        id: LEE_ROBINSON,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    PlaceholderCustomer {
        id: MICHAEL_NOVOTNY,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    PlaceholderCustomer {
        id: AMY_BURNS,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    PlaceholderCustomer {
        id: BALAZS_ORBAN,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

pub const INVOICES: &[PlaceholderInvoice] = &[
    PlaceholderInvoice { customer_id: EVIL_RABBIT, amount: 15795, status: "pending", date: "2022-12-06" },
    PlaceholderInvoice { customer_id: DELBA_DE_OLIVEIRA, amount: 20348, status: "pending", date: "2022-11-14" },
    PlaceholderInvoice { customer_id: AMY_BURNS, amount: 3040, status: "paid", date: "2022-10-29" },
    PlaceholderInvoice { customer_id: MICHAEL_NOVOTNY, amount: 44800, status: "paid", date: "2023-09-10" },
    PlaceholderInvoice { customer_id: BALAZS_ORBAN, amount: 34577, status: "pending", date: "2023-08-05" },
    PlaceholderInvoice { customer_id: LEE_ROBINSON, amount: 54246, status: "pending", date: "2023-07-16" },
    PlaceholderInvoice { customer_id: EVIL_RABBIT, amount: 666, status: "pending", date: "2023-06-27" },
    PlaceholderInvoice { customer_id: MICHAEL_NOVOTNY, amount: 32545, status: "paid", date: "2023-06-09" },
    PlaceholderInvoice { customer_id: AMY_BURNS, amount: 1250, status: "paid", date: "2023-06-17" },
    PlaceholderInvoice { customer_id: BALAZS_ORBAN, amount: 8546, status: "paid", date: "2023-06-07" },
    PlaceholderInvoice { customer_id: DELBA_DE_OLIVEIRA, amount: 500, status: "paid", date: "2023-08-19" },
    PlaceholderInvoice { customer_id: BALAZS_ORBAN, amount: 8945, status: "paid", date: "2023-06-03" },
    PlaceholderInvoice { customer_id: LEE_ROBINSON, amount: 1000, status: "paid", date: "2022-06-05" },
];

pub const REVENUE: &[PlaceholderRevenue] = &[
    PlaceholderRevenue { month: "Jan", revenue: 2000 },
    PlaceholderRevenue { month: "Feb", revenue: 1800 },
    PlaceholderRevenue { month: "Mar", revenue: 2200 },
    PlaceholderRevenue { month: "Apr", revenue: 2500 },
    PlaceholderRevenue { month: "May", revenue: 2300 },
    PlaceholderRevenue { month: "Jun", revenue: 3200 },
    PlaceholderRevenue { month: "Jul", revenue: 3500 },
    PlaceholderRevenue { month: "Aug", revenue: 3700 },
    PlaceholderRevenue { month: "Sep", revenue: 2500 },
    PlaceholderRevenue { month: "Oct", revenue: 2800 },
    PlaceholderRevenue { month: "Nov", revenue: 3000 },
    PlaceholderRevenue { month: "Dec", revenue: 4800 },
];

/// Namespace for placeholder invoice keys
const INVOICE_NAMESPACE: Uuid = Uuid::from_u128(0x6c1f_0e52_8f0a_4b0e_9d57_3c1e_2a4b_7f10);

/// Stable key for the `index`-th placeholder invoice, so re-seeding
/// hits the primary key and is ignored.
pub fn invoice_id(index: usize) -> String {
    Uuid::new_v5(&INVOICE_NAMESPACE, format!("invoice-{index}").as_bytes()).to_string()
}

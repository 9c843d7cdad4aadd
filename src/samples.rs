/// A named example document with its expected value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleDocument {
    pub name: &'static str,
    pub document: &'static str,
    pub expected: f64,
}

/// The six reference documents, in the order the command-line driver evaluates them.
pub const SAMPLE_DOCUMENTS: [SampleDocument; 6] = [
    SampleDocument {
        name: "subtraction-1-2",
        document: "<Subtraction><int>1</int><int>2</int> </Subtraction>",
        expected: -1.0,
    },
    SampleDocument {
        name: "subtraction-2-1",
        document: "<Subtraction><int>2</int><int>1</int></Subtraction>",
        expected: 1.0,
    },
    SampleDocument {
        name: "division-1-2",
        document: "<Division><int>1</int><int>2</int></Division>",
        expected: 0.5,
    },
    SampleDocument {
        name: "division-2-1",
        document: "<Division><int>2</int><int>1</int></Division>",
        expected: 2.0,
    },
    SampleDocument {
        name: "addition-3-5",
        document: "<Addition><int>3</int><int>5</int></Addition>",
        expected: 8.0,
    },
    SampleDocument {
        name: "nested",
        document: "
     <Division>
          <Addition>
               <int>5</int>
               <Subtraction>
                    <int>2</int>
                    <int>1</int>
               </Subtraction>
          </Addition>
          <Division>
               <int>10</int>
               <int>2</int>
          </Division>
     </Division>
",
        expected: 1.2,
    },
];

//! Built-in fragment templates.
//!
//! Every template is an independently well-formed XML document with a
//! `ManagementPackFragment` root. `##Token##` markers are resolved by the
//! render layer; the merger then lifts the known element kinds out of each
//! rendered fragment.

use crate::catalog::{
    ALERT_PRIORITY_OPTIONS, ALERT_SEVERITY_OPTIONS, Category, EVENT_LOG_OPTIONS, FieldSpec,
    FragmentDefinition, TARGET_CLASS_OPTIONS,
};

pub const BUILTIN: &[FragmentDefinition] = &[
    FragmentDefinition {
        id: "registry-key",
        name: "Registry Key Discovery",
        category: Category::Discovery,
        template: REGISTRY_KEY,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("regKeyPath", "Registry Key Path")
                .required()
                .placeholder("SOFTWARE\\Microsoft\\CCM"),
            FieldSpec::select("targetClass", "Target Class", TARGET_CLASS_OPTIONS),
        ],
    },
    FragmentDefinition {
        id: "registry-value",
        name: "Registry Value Discovery",
        category: Category::Discovery,
        template: REGISTRY_VALUE,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("regKeyPath", "Registry Key Path").required(),
            FieldSpec::text("regValueName", "Value Name").required(),
            FieldSpec::select(
                "valueMode",
                "Comparison Mode",
                &["existence", "string", "integer", "regex"],
            ),
            FieldSpec::select(
                "operator",
                "Operator",
                &[
                    "Equal",
                    "NotEqual",
                    "Greater",
                    "Less",
                    "GreaterEqual",
                    "LessEqual",
                    "Like",
                    "NotLike",
                ],
            ),
            FieldSpec::text("expectedValue", "Expected Value"),
            FieldSpec::text("regexPattern", "Regex Pattern"),
            FieldSpec::select("targetClass", "Target Class", TARGET_CLASS_OPTIONS),
        ],
    },
    FragmentDefinition {
        id: "wmi-query",
        name: "WMI Query Discovery",
        category: Category::Discovery,
        template: WMI_QUERY,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("wmiNamespace", "WMI Namespace").default_value("root\\cimv2"),
            FieldSpec::textarea("wmiQuery", "WMI Query")
                .required()
                .placeholder("SELECT * FROM Win32_ComputerSystem"),
            FieldSpec::number("frequencySeconds", "Discovery Frequency (seconds)")
                .default_value("3600"),
            FieldSpec::select("targetClass", "Target Class", TARGET_CLASS_OPTIONS),
        ],
    },
    FragmentDefinition {
        id: "service-discovery",
        name: "Windows Service Discovery",
        category: Category::Discovery,
        template: SERVICE_DISCOVERY,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("serviceName", "Service Name")
                .required()
                .placeholder("W3SVC"),
            FieldSpec::select("targetClass", "Target Class", TARGET_CLASS_OPTIONS),
        ],
    },
    FragmentDefinition {
        id: "service-monitor",
        name: "Service Monitor",
        category: Category::Monitor,
        template: SERVICE_MONITOR,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("serviceName", "Service Name")
                .required()
                .placeholder("W3SVC"),
            FieldSpec::text("targetClass", "Target Class").required(),
            FieldSpec::select("alertPriority", "Alert Priority", ALERT_PRIORITY_OPTIONS),
            FieldSpec::select("alertSeverity", "Alert Severity", ALERT_SEVERITY_OPTIONS),
        ],
    },
    FragmentDefinition {
        id: "performance-monitor",
        name: "Performance Threshold Monitor",
        category: Category::Monitor,
        template: PERFORMANCE_MONITOR,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("objectName", "Performance Object")
                .required()
                .placeholder("Processor"),
            FieldSpec::text("counterName", "Counter Name")
                .required()
                .placeholder("% Processor Time"),
            FieldSpec::text("instanceName", "Instance Name").default_value("_Total"),
            FieldSpec::number("threshold", "Threshold").required(),
            FieldSpec::select("operator", "Operator", &["Greater", "Less", "Equal", "NotEqual"]),
            FieldSpec::number("numSamples", "Number of Samples").default_value("3"),
            FieldSpec::number("frequencySeconds", "Sample Frequency (seconds)")
                .default_value("300"),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "event-monitor",
        name: "Event Log Monitor",
        category: Category::Monitor,
        template: EVENT_MONITOR,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::select("eventLog", "Event Log", EVENT_LOG_OPTIONS),
            FieldSpec::number("eventId", "Unhealthy Event ID").required(),
            FieldSpec::number("recoveryEventId", "Recovery Event ID").required(),
            FieldSpec::text("eventSource", "Event Source"),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "performance-collection",
        name: "Performance Collection Rule",
        category: Category::Rule,
        template: PERFORMANCE_COLLECTION,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("objectName", "Performance Object").required(),
            FieldSpec::text("counterName", "Counter Name").required(),
            FieldSpec::text("instanceName", "Instance Name").default_value("_Total"),
            FieldSpec::number("frequencySeconds", "Collection Frequency (seconds)")
                .default_value("300"),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "event-collection",
        name: "Event Collection Rule",
        category: Category::Rule,
        template: EVENT_COLLECTION,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::select("eventLog", "Event Log", EVENT_LOG_OPTIONS),
            FieldSpec::number("eventId", "Event ID").required(),
            FieldSpec::text("eventSource", "Event Source"),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "computer-group",
        name: "Computer Group",
        category: Category::Group,
        template: COMPUTER_GROUP,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("groupName", "Group Display Name").required(),
            FieldSpec::textarea("groupDescription", "Description"),
        ],
    },
    FragmentDefinition {
        id: "powershell-task",
        name: "PowerShell Task",
        category: Category::Task,
        template: POWERSHELL_TASK,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("taskName", "Task Display Name").required(),
            FieldSpec::textarea("scriptBody", "PowerShell Script").required(),
            FieldSpec::number("timeoutSeconds", "Timeout (seconds)").default_value("300"),
            FieldSpec::text("targetClass", "Target Class")
                .default_value("Windows!Microsoft.Windows.Computer"),
        ],
    },
    FragmentDefinition {
        id: "state-view",
        name: "State View",
        category: Category::View,
        template: STATE_VIEW,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("viewName", "View Display Name").required(),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "alert-view",
        name: "Alert View",
        category: Category::View,
        template: ALERT_VIEW,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("viewName", "View Display Name").required(),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
    FragmentDefinition {
        id: "performance-view",
        name: "Performance View",
        category: Category::View,
        template: PERFORMANCE_VIEW,
        fields: &[
            FieldSpec::text("uniqueId", "Unique ID")
                .required()
                .default_value("Component"),
            FieldSpec::text("viewName", "View Display Name").required(),
            FieldSpec::text("targetClass", "Target Class").required(),
        ],
    },
];

const REGISTRY_KEY: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <TypeDefinitions>
    <EntityTypes>
      <ClassTypes>
        <ClassType ID="##MPId##.##UniqueId##.Class" Base="Windows!Microsoft.Windows.LocalApplication" Accessibility="Public" Abstract="false" Hosted="true" Singleton="false" />
      </ClassTypes>
    </EntityTypes>
  </TypeDefinitions>
  <Monitoring>
    <Discoveries>
      <Discovery ID="##MPId##.##UniqueId##.Discovery" Target="##TargetClass##" Enabled="true" ConfirmDelivery="false" Remotable="true" Priority="Normal">
        <Category>Discovery</Category>
        <DiscoveryTypes>
          <DiscoveryClass TypeID="##MPId##.##UniqueId##.Class" />
        </DiscoveryTypes>
        <DataSource ID="DS" TypeID="Windows!Microsoft.Windows.FilteredRegistryDiscoveryProvider">
          <ComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</ComputerName>
          <RegistryAttributeDefinitions>
            <RegistryAttributeDefinition>
              <AttributeName>##UniqueId##RegKeyExists</AttributeName>
              <Path>##RegKeyPath##</Path>
              <PathType>0</PathType>
              <AttributeType>0</AttributeType>
            </RegistryAttributeDefinition>
          </RegistryAttributeDefinitions>
          <Frequency>86400</Frequency>
          <ClassId>$MPElement[Name="##MPId##.##UniqueId##.Class"]$</ClassId>
          <InstanceSettings>
            <Settings>
              <Setting>
                <Name>$MPElement[Name="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
              <Setting>
                <Name>$MPElement[Name="System!System.Entity"]/DisplayName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
            </Settings>
          </InstanceSettings>
          <Expression>
            <SimpleExpression>
              <ValueExpression>
                <XPathQuery Type="Boolean">Values/##UniqueId##RegKeyExists</XPathQuery>
              </ValueExpression>
              <Operator>Equal</Operator>
              <ValueExpression>
                <Value Type="Boolean">true</Value>
              </ValueExpression>
            </SimpleExpression>
          </Expression>
        </DataSource>
      </Discovery>
    </Discoveries>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Class">
          <Name>##AppName## ##UniqueId##</Name>
        </DisplayString>
        <DisplayString ElementID="##MPId##.##UniqueId##.Discovery">
          <Name>##AppName## ##UniqueId## Registry Key Discovery</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const REGISTRY_VALUE: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <TypeDefinitions>
    <EntityTypes>
      <ClassTypes>
        <ClassType ID="##MPId##.##UniqueId##.Class" Base="Windows!Microsoft.Windows.LocalApplication" Accessibility="Public" Abstract="false" Hosted="true" Singleton="false" />
      </ClassTypes>
    </EntityTypes>
  </TypeDefinitions>
  <Monitoring>
    <Discoveries>
      <Discovery ID="##MPId##.##UniqueId##.Discovery" Target="##TargetClass##" Enabled="true" ConfirmDelivery="false" Remotable="true" Priority="Normal">
        <Category>Discovery</Category>
        <DiscoveryTypes>
          <DiscoveryClass TypeID="##MPId##.##UniqueId##.Class" />
        </DiscoveryTypes>
        <DataSource ID="DS" TypeID="Windows!Microsoft.Windows.FilteredRegistryDiscoveryProvider">
          <ComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</ComputerName>
          <RegistryAttributeDefinitions>
            <RegistryAttributeDefinition>
              <AttributeName>##UniqueId##RegValue</AttributeName>
              <Path>##RegKeyPath##\##RegValueName##</Path>
              <PathType>1</PathType>
              <AttributeType>##AttributeType##</AttributeType>
            </RegistryAttributeDefinition>
          </RegistryAttributeDefinitions>
          <Frequency>86400</Frequency>
          <ClassId>$MPElement[Name="##MPId##.##UniqueId##.Class"]$</ClassId>
          <InstanceSettings>
            <Settings>
              <Setting>
                <Name>$MPElement[Name="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
              <Setting>
                <Name>$MPElement[Name="System!System.Entity"]/DisplayName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
            </Settings>
          </InstanceSettings>
          <Expression>##ValueExpression##</Expression>
        </DataSource>
      </Discovery>
    </Discoveries>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Class">
          <Name>##AppName## ##UniqueId##</Name>
        </DisplayString>
        <DisplayString ElementID="##MPId##.##UniqueId##.Discovery">
          <Name>##AppName## ##UniqueId## Registry Value Discovery</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const WMI_QUERY: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <TypeDefinitions>
    <EntityTypes>
      <ClassTypes>
        <ClassType ID="##MPId##.##UniqueId##.Class" Base="Windows!Microsoft.Windows.LocalApplication" Accessibility="Public" Abstract="false" Hosted="true" Singleton="false" />
      </ClassTypes>
    </EntityTypes>
  </TypeDefinitions>
  <Monitoring>
    <Discoveries>
      <Discovery ID="##MPId##.##UniqueId##.Discovery" Target="##TargetClass##" Enabled="true" ConfirmDelivery="false" Remotable="true" Priority="Normal">
        <Category>Discovery</Category>
        <DiscoveryTypes>
          <DiscoveryClass TypeID="##MPId##.##UniqueId##.Class" />
        </DiscoveryTypes>
        <DataSource ID="DS" TypeID="Windows!Microsoft.Windows.WmiProviderWithClassSnapshotDataMapper">
          <NameSpace>\\$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$\##WmiNamespace##</NameSpace>
          <Query>##WmiQuery##</Query>
          <Frequency>##FrequencySeconds##</Frequency>
          <ClassId>$MPElement[Name="##MPId##.##UniqueId##.Class"]$</ClassId>
          <InstanceSettings>
            <Settings>
              <Setting>
                <Name>$MPElement[Name="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
              <Setting>
                <Name>$MPElement[Name="System!System.Entity"]/DisplayName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
            </Settings>
          </InstanceSettings>
        </DataSource>
      </Discovery>
    </Discoveries>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Class">
          <Name>##AppName## ##UniqueId##</Name>
        </DisplayString>
        <DisplayString ElementID="##MPId##.##UniqueId##.Discovery">
          <Name>##AppName## ##UniqueId## WMI Discovery</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const SERVICE_DISCOVERY: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <TypeDefinitions>
    <EntityTypes>
      <ClassTypes>
        <ClassType ID="##MPId##.##UniqueId##.Class" Base="Windows!Microsoft.Windows.LocalApplication" Accessibility="Public" Abstract="false" Hosted="true" Singleton="false" />
      </ClassTypes>
    </EntityTypes>
  </TypeDefinitions>
  <Monitoring>
    <Discoveries>
      <Discovery ID="##MPId##.##UniqueId##.Discovery" Target="##TargetClass##" Enabled="true" ConfirmDelivery="false" Remotable="true" Priority="Normal">
        <Category>Discovery</Category>
        <DiscoveryTypes>
          <DiscoveryClass TypeID="##MPId##.##UniqueId##.Class" />
        </DiscoveryTypes>
        <DataSource ID="DS" TypeID="Windows!Microsoft.Windows.WmiProviderWithClassSnapshotDataMapper">
          <NameSpace>\\$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$\root\cimv2</NameSpace>
          <Query>SELECT Name, State FROM Win32_Service WHERE Name = '##ServiceName##'</Query>
          <Frequency>14400</Frequency>
          <ClassId>$MPElement[Name="##MPId##.##UniqueId##.Class"]$</ClassId>
          <InstanceSettings>
            <Settings>
              <Setting>
                <Name>$MPElement[Name="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Name>
                <Value>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</Value>
              </Setting>
              <Setting>
                <Name>$MPElement[Name="System!System.Entity"]/DisplayName$</Name>
                <Value>##ServiceName##</Value>
              </Setting>
            </Settings>
          </InstanceSettings>
        </DataSource>
      </Discovery>
    </Discoveries>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Class">
          <Name>##AppName## ##UniqueId##</Name>
        </DisplayString>
        <DisplayString ElementID="##MPId##.##UniqueId##.Discovery">
          <Name>##AppName## ##UniqueId## Service Discovery</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const SERVICE_MONITOR: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Monitors>
      <UnitMonitor ID="##MPId##.##UniqueId##.Service.Monitor" Accessibility="Public" Enabled="true" Target="##TargetClass##" ParentMonitorID="Health!System.Health.AvailabilityState" Remotable="true" Priority="Normal" TypeID="Windows!Microsoft.Windows.CheckNTServiceStateMonitorType" ConfirmDelivery="false">
        <Category>AvailabilityHealth</Category>
        <AlertSettings AlertMessage="##MPId##.##UniqueId##.Service.Monitor.AlertMessage">
          <AlertOnState>Warning</AlertOnState>
          <AutoResolve>true</AutoResolve>
          <AlertPriority>##AlertPriority##</AlertPriority>
          <AlertSeverity>##AlertSeverity##</AlertSeverity>
          <AlertParameters>
            <AlertParameter1>$Data/Context/Property[@Name='Name']$</AlertParameter1>
            <AlertParameter2>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/PrincipalName$</AlertParameter2>
          </AlertParameters>
        </AlertSettings>
        <OperationalStates>
          <OperationalState ID="Running" MonitorTypeStateID="Running" HealthState="Success" />
          <OperationalState ID="NotRunning" MonitorTypeStateID="NotRunning" HealthState="Warning" />
        </OperationalStates>
        <Configuration>
          <ComputerName />
          <ServiceName>##ServiceName##</ServiceName>
          <CheckStartupType />
        </Configuration>
      </UnitMonitor>
    </Monitors>
  </Monitoring>
  <Presentation>
    <StringResources>
      <StringResource ID="##MPId##.##UniqueId##.Service.Monitor.AlertMessage" />
    </StringResources>
  </Presentation>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Service.Monitor">
          <Name>##AppName## ##ServiceName## Service Monitor</Name>
        </DisplayString>
        <DisplayString ElementID="##MPId##.##UniqueId##.Service.Monitor.AlertMessage">
          <Name>##ServiceName## service is not running</Name>
          <Description>The {0} service is not running on {1}.</Description>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const PERFORMANCE_MONITOR: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Monitors>
      <UnitMonitor ID="##MPId##.##UniqueId##.Performance.Monitor" Accessibility="Public" Enabled="true" Target="##TargetClass##" ParentMonitorID="Health!System.Health.PerformanceState" Remotable="true" Priority="Normal" TypeID="Performance!System.Performance.ConsecutiveSamplesThreshold" ConfirmDelivery="false">
        <Category>PerformanceHealth</Category>
        <OperationalStates>
          <OperationalState ID="UnderThreshold" MonitorTypeStateID="ConditionFalse" HealthState="Success" />
          <OperationalState ID="OverThreshold" MonitorTypeStateID="ConditionTrue" HealthState="Warning" />
        </OperationalStates>
        <Configuration>
          <ComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/NetworkName$</ComputerName>
          <CounterName>##CounterName##</CounterName>
          <ObjectName>##ObjectName##</ObjectName>
          <InstanceName>##InstanceName##</InstanceName>
          <AllInstances>false</AllInstances>
          <Frequency>##FrequencySeconds##</Frequency>
          <Threshold>##Threshold##</Threshold>
          <Direction>##Operator##</Direction>
          <NumSamples>##NumSamples##</NumSamples>
        </Configuration>
      </UnitMonitor>
    </Monitors>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Performance.Monitor">
          <Name>##AppName## ##ObjectName## ##CounterName## Monitor</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const EVENT_MONITOR: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Monitors>
      <UnitMonitor ID="##MPId##.##UniqueId##.Event.Monitor" Accessibility="Public" Enabled="true" Target="##TargetClass##" ParentMonitorID="Health!System.Health.AvailabilityState" Remotable="true" Priority="Normal" TypeID="Windows!Microsoft.Windows.2SingleEventLog2StateMonitorType" ConfirmDelivery="false">
        <Category>AvailabilityHealth</Category>
        <OperationalStates>
          <OperationalState ID="EventRaised" MonitorTypeStateID="FirstEventRaised" HealthState="Warning" />
          <OperationalState ID="RecoveryRaised" MonitorTypeStateID="SecondEventRaised" HealthState="Success" />
        </OperationalStates>
        <Configuration>
          <FirstComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/NetworkName$</FirstComputerName>
          <FirstLogName>##EventLog##</FirstLogName>
          <FirstExpression>
            <And>
              <Expression>
                <SimpleExpression>
                  <ValueExpression>
                    <XPathQuery Type="UnsignedInteger">EventDisplayNumber</XPathQuery>
                  </ValueExpression>
                  <Operator>Equal</Operator>
                  <ValueExpression>
                    <Value Type="UnsignedInteger">##EventId##</Value>
                  </ValueExpression>
                </SimpleExpression>
              </Expression>
              <Expression>
                <SimpleExpression>
                  <ValueExpression>
                    <XPathQuery Type="String">PublisherName</XPathQuery>
                  </ValueExpression>
                  <Operator>Equal</Operator>
                  <ValueExpression>
                    <Value Type="String">##EventSource##</Value>
                  </ValueExpression>
                </SimpleExpression>
              </Expression>
            </And>
          </FirstExpression>
          <SecondComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/NetworkName$</SecondComputerName>
          <SecondLogName>##EventLog##</SecondLogName>
          <SecondExpression>
            <SimpleExpression>
              <ValueExpression>
                <XPathQuery Type="UnsignedInteger">EventDisplayNumber</XPathQuery>
              </ValueExpression>
              <Operator>Equal</Operator>
              <ValueExpression>
                <Value Type="UnsignedInteger">##RecoveryEventId##</Value>
              </ValueExpression>
            </SimpleExpression>
          </SecondExpression>
        </Configuration>
      </UnitMonitor>
    </Monitors>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Event.Monitor">
          <Name>##AppName## Event ##EventId## Monitor</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const PERFORMANCE_COLLECTION: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Rules>
      <Rule ID="##MPId##.##UniqueId##.PerformanceCollection.Rule" Enabled="true" Target="##TargetClass##" ConfirmDelivery="false" Remotable="true" Priority="Normal" DiscardLevel="100">
        <Category>PerformanceCollection</Category>
        <DataSources>
          <DataSource ID="DS" TypeID="Performance!System.Performance.OptimizedDataProvider">
            <ComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/NetworkName$</ComputerName>
            <CounterName>##CounterName##</CounterName>
            <ObjectName>##ObjectName##</ObjectName>
            <InstanceName>##InstanceName##</InstanceName>
            <AllInstances>false</AllInstances>
            <Frequency>##FrequencySeconds##</Frequency>
            <Tolerance>0</Tolerance>
            <ToleranceType>Absolute</ToleranceType>
            <MaximumSampleSeparation>1</MaximumSampleSeparation>
          </DataSource>
        </DataSources>
        <WriteActions>
          <WriteAction ID="CollectPerfData" TypeID="SC!Microsoft.SystemCenter.CollectPerformanceData" />
        </WriteActions>
      </Rule>
    </Rules>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.PerformanceCollection.Rule">
          <Name>##AppName## ##ObjectName## ##CounterName## Collection</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const EVENT_COLLECTION: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Rules>
      <Rule ID="##MPId##.##UniqueId##.EventCollection.Rule" Enabled="true" Target="##TargetClass##" ConfirmDelivery="false" Remotable="true" Priority="Normal" DiscardLevel="100">
        <Category>EventCollection</Category>
        <DataSources>
          <DataSource ID="DS" TypeID="Windows!Microsoft.Windows.EventProvider">
            <ComputerName>$Target/Host/Property[Type="Windows!Microsoft.Windows.Computer"]/NetworkName$</ComputerName>
            <LogName>##EventLog##</LogName>
            <Expression>
              <And>
                <Expression>
                  <SimpleExpression>
                    <ValueExpression>
                      <XPathQuery Type="UnsignedInteger">EventDisplayNumber</XPathQuery>
                    </ValueExpression>
                    <Operator>Equal</Operator>
                    <ValueExpression>
                      <Value Type="UnsignedInteger">##EventId##</Value>
                    </ValueExpression>
                  </SimpleExpression>
                </Expression>
                <Expression>
                  <SimpleExpression>
                    <ValueExpression>
                      <XPathQuery Type="String">PublisherName</XPathQuery>
                    </ValueExpression>
                    <Operator>Equal</Operator>
                    <ValueExpression>
                      <Value Type="String">##EventSource##</Value>
                    </ValueExpression>
                  </SimpleExpression>
                </Expression>
              </And>
            </Expression>
          </DataSource>
        </DataSources>
        <WriteActions>
          <WriteAction ID="CollectEvent" TypeID="SC!Microsoft.SystemCenter.CollectEvent" />
        </WriteActions>
      </Rule>
    </Rules>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.EventCollection.Rule">
          <Name>##AppName## Event ##EventId## Collection</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const COMPUTER_GROUP: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <TypeDefinitions>
    <EntityTypes>
      <ClassTypes>
        <ClassType ID="##MPId##.##UniqueId##.Group" Base="SC!Microsoft.SystemCenter.ComputerGroup" Accessibility="Public" Abstract="false" Hosted="false" Singleton="true" />
      </ClassTypes>
    </EntityTypes>
  </TypeDefinitions>
  <Monitoring>
    <Discoveries>
      <Discovery ID="##MPId##.##UniqueId##.Group.Discovery" Target="##MPId##.##UniqueId##.Group" Enabled="true" ConfirmDelivery="false" Remotable="true" Priority="Normal">
        <Category>Discovery</Category>
        <DiscoveryTypes>
          <DiscoveryRelationship TypeID="SC!Microsoft.SystemCenter.ComputerGroupContainsComputer" />
        </DiscoveryTypes>
        <DataSource ID="GroupPopulationDataSource" TypeID="SC!Microsoft.SystemCenter.GroupPopulator">
          <RuleId>$MPElement$</RuleId>
          <GroupInstanceId>$MPElement[Name="##MPId##.##UniqueId##.Group"]$</GroupInstanceId>
          <MembershipRules>
            <MembershipRule>
              <MonitoringClass>$MPElement[Name="Windows!Microsoft.Windows.Computer"]$</MonitoringClass>
              <RelationshipClass>$MPElement[Name="SC!Microsoft.SystemCenter.ComputerGroupContainsComputer"]$</RelationshipClass>
            </MembershipRule>
          </MembershipRules>
        </DataSource>
      </Discovery>
    </Discoveries>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Group">
          <Name>##GroupName##</Name>
          <Description>##GroupDescription##</Description>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const POWERSHELL_TASK: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Monitoring>
    <Tasks>
      <Task ID="##MPId##.##UniqueId##.Task" Accessibility="Public" Enabled="true" Target="##TargetClass##" Timeout="##TimeoutSeconds##" Remotable="true">
        <Category>Maintenance</Category>
        <ProbeAction ID="PA" TypeID="Windows!Microsoft.Windows.PowerShellProbe">
          <ScriptName>##UniqueId##.ps1</ScriptName>
          <ScriptBody>##ScriptBody##</ScriptBody>
          <TimeoutSeconds>##TimeoutSeconds##</TimeoutSeconds>
        </ProbeAction>
      </Task>
    </Tasks>
  </Monitoring>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.Task">
          <Name>##TaskName##</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const STATE_VIEW: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Presentation>
    <Views>
      <View ID="##MPId##.##UniqueId##.StateView" Accessibility="Public" Enabled="true" Target="##TargetClass##" TypeID="SC!Microsoft.SystemCenter.StateViewType" Visible="true">
        <Category>Operations</Category>
        <Criteria>
          <InMaintenanceMode>false</InMaintenanceMode>
        </Criteria>
      </View>
    </Views>
  </Presentation>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.StateView">
          <Name>##ViewName##</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const ALERT_VIEW: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Presentation>
    <Views>
      <View ID="##MPId##.##UniqueId##.AlertView" Accessibility="Public" Enabled="true" Target="##TargetClass##" TypeID="SC!Microsoft.SystemCenter.AlertViewType" Visible="true">
        <Category>Operations</Category>
        <Criteria>
          <ResolutionState>
            <StateRange Operator="NotEquals">255</StateRange>
          </ResolutionState>
        </Criteria>
      </View>
    </Views>
  </Presentation>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.AlertView">
          <Name>##ViewName##</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;

const PERFORMANCE_VIEW: &str = r###"<ManagementPackFragment SchemaVersion="2.0">
  <Presentation>
    <Views>
      <View ID="##MPId##.##UniqueId##.PerformanceView" Accessibility="Public" Enabled="true" Target="##TargetClass##" TypeID="SC!Microsoft.SystemCenter.PerformanceViewType" Visible="true">
        <Category>Operations</Category>
      </View>
    </Views>
  </Presentation>
  <LanguagePacks>
    <LanguagePack ID="ENU" IsDefault="true">
      <DisplayStrings>
        <DisplayString ElementID="##MPId##.##UniqueId##.PerformanceView">
          <Name>##ViewName##</Name>
        </DisplayString>
      </DisplayStrings>
    </LanguagePack>
  </LanguagePacks>
</ManagementPackFragment>
"###;
